//! Browser implementation of `DocumentApi`
//!
//! Plain requests go through gloo-net. Uploads use XMLHttpRequest because
//! fetch has no upload progress events.

use async_trait::async_trait;
use futures::channel::mpsc;
use futures::StreamExt;
use gloo_net::http::{Request, Response};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, FormData, ProgressEvent, XmlHttpRequest};

use crate::config::AppConfig;
use crate::domain::models::{AskRequest, AskResponse, Document, DocumentFile};
use crate::shared::errors::{AppError, Result};
use crate::shared::services::api_service::{endpoints, DocumentApi, ProgressReporter, UPLOAD_FIELD};

/// API client backed by the browser's networking stack
#[derive(Debug, Clone)]
pub struct WebApiClient {
    config: AppConfig,
}

impl WebApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

fn network_error(err: gloo_net::Error) -> AppError {
    AppError::Network(err.to_string())
}

fn js_error(err: JsValue) -> AppError {
    AppError::Browser(format!("{:?}", err))
}

/// Turn a non-2xx response into `AppError::Http`, keeping the server detail
async fn check_status(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::from_response(status, &body))
}

#[async_trait(?Send)]
impl DocumentApi for WebApiClient {
    async fn get_documents(&self) -> Result<Vec<Document>> {
        let response = Request::get(&self.url(endpoints::DOCUMENTS))
            .send()
            .await
            .map_err(network_error)?;

        check_status(response)
            .await?
            .json::<Vec<Document>>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    async fn upload_document(&self, file: DocumentFile, on_progress: &dyn Fn(u8)) -> Result<()> {
        enum XhrEvent {
            Progress { loaded: f64, total: f64 },
            Loaded,
            Failed(&'static str),
        }

        let form = FormData::new().map_err(js_error)?;
        let bytes = Uint8Array::from(file.bytes.as_slice());
        let parts = Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        if let Some(content_type) = &file.content_type {
            options.set_type(content_type);
        }
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.filename)
            .map_err(js_error)?;

        let xhr = XmlHttpRequest::new().map_err(js_error)?;
        xhr.open_with_async("POST", &self.url(endpoints::UPLOAD), true)
            .map_err(js_error)?;

        let (tx, mut events) = mpsc::unbounded::<XhrEvent>();

        let progress_tx = tx.clone();
        let on_upload_progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |evt: ProgressEvent| {
            if evt.length_computable() {
                let _ = progress_tx.unbounded_send(XhrEvent::Progress {
                    loaded: evt.loaded(),
                    total: evt.total(),
                });
            }
        });
        let load_tx = tx.clone();
        let on_load = Closure::<dyn FnMut(ProgressEvent)>::new(move |_evt: ProgressEvent| {
            let _ = load_tx.unbounded_send(XhrEvent::Loaded);
        });
        let error_tx = tx.clone();
        let on_error = Closure::<dyn FnMut(ProgressEvent)>::new(move |_evt: ProgressEvent| {
            let _ = error_tx.unbounded_send(XhrEvent::Failed("network error"));
        });
        let abort_tx = tx;
        let on_abort = Closure::<dyn FnMut(ProgressEvent)>::new(move |_evt: ProgressEvent| {
            let _ = abort_tx.unbounded_send(XhrEvent::Failed("upload aborted"));
        });

        xhr.upload()
            .map_err(js_error)?
            .set_onprogress(Some(on_upload_progress.as_ref().unchecked_ref()));
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
        xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        xhr.set_onabort(Some(on_abort.as_ref().unchecked_ref()));

        let reporter = ProgressReporter::new(on_progress);
        reporter.report(0, file.size());
        xhr.send_with_opt_form_data(Some(&form)).map_err(js_error)?;

        // Closures stay alive until the request settles
        let outcome = loop {
            match events.next().await {
                Some(XhrEvent::Progress { loaded, total }) => {
                    reporter.report(loaded as u64, total as u64);
                }
                Some(XhrEvent::Loaded) => break Ok(()),
                Some(XhrEvent::Failed(reason)) => break Err(AppError::Network(reason.to_string())),
                None => break Err(AppError::Network("upload interrupted".to_string())),
            }
        };
        drop((on_upload_progress, on_load, on_error, on_abort));
        outcome?;

        let status = xhr.status().map_err(js_error)?;
        if !(200..300).contains(&status) {
            let body = xhr.response_text().ok().flatten().unwrap_or_default();
            return Err(AppError::from_response(status, &body));
        }

        reporter.report(file.size(), file.size());
        Ok(())
    }

    async fn delete_document(&self, filename: &str) -> Result<()> {
        let response = Request::delete(&self.url(&endpoints::document(filename)))
            .send()
            .await
            .map_err(network_error)?;

        check_status(response).await.map(|_| ())
    }

    async fn ask_question(&self, content: &str) -> Result<AskResponse> {
        let body = AskRequest {
            content: content.to_string(),
        };
        let response = Request::post(&self.url(endpoints::ASK))
            .json(&body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        check_status(response)
            .await?
            .json::<AskResponse>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}
