//! Native implementation of `DocumentApi` (desktop shell)

use async_trait::async_trait;
use futures::channel::mpsc;
use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Response};

use crate::config::AppConfig;
use crate::domain::models::{AskRequest, AskResponse, Document, DocumentFile};
use crate::shared::errors::{AppError, Result};
use crate::shared::services::api_service::{endpoints, DocumentApi, ProgressReporter, UPLOAD_FIELD};

/// Upload body is streamed in chunks of this size so progress can be reported
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct NativeApiClient {
    config: AppConfig,
    http: Client,
}

impl NativeApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

fn network_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        AppError::Decode(err.to_string())
    } else {
        AppError::Network(err.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::from_response(status.as_u16(), &body))
}

#[async_trait(?Send)]
impl DocumentApi for NativeApiClient {
    async fn get_documents(&self) -> Result<Vec<Document>> {
        let response = self
            .http
            .get(self.url(endpoints::DOCUMENTS))
            .send()
            .await
            .map_err(network_error)?;

        check_status(response)
            .await?
            .json::<Vec<Document>>()
            .await
            .map_err(network_error)
    }

    async fn upload_document(&self, file: DocumentFile, on_progress: &dyn Fn(u8)) -> Result<()> {
        let total = file.size();
        let reporter = ProgressReporter::new(on_progress);
        reporter.report(0, total);

        let (tx, mut sent_rx) = mpsc::unbounded::<u64>();
        let chunks: Vec<Vec<u8>> = file
            .bytes
            .chunks(UPLOAD_CHUNK_SIZE)
            .map(<[u8]>::to_vec)
            .collect();
        let mut sent = 0u64;
        let body = futures::stream::iter(chunks).map(move |chunk| {
            sent += chunk.len() as u64;
            let _ = tx.unbounded_send(sent);
            Ok::<_, std::io::Error>(chunk)
        });

        let mut part = Part::stream_with_length(Body::wrap_stream(body), total)
            .file_name(file.filename.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type).map_err(network_error)?;
        }
        let form = Form::new().part(UPLOAD_FIELD, part);

        let request = self.http.post(self.url(endpoints::UPLOAD)).multipart(form).send();
        tokio::pin!(request);

        let response = loop {
            tokio::select! {
                Some(sent) = sent_rx.next() => reporter.report(sent, total),
                result = &mut request => break result.map_err(network_error)?,
            }
        };

        check_status(response).await?;
        reporter.report(total, total);
        Ok(())
    }

    async fn delete_document(&self, filename: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&endpoints::document(filename)))
            .send()
            .await
            .map_err(network_error)?;

        check_status(response).await.map(|_| ())
    }

    async fn ask_question(&self, content: &str) -> Result<AskResponse> {
        let response = self
            .http
            .post(self.url(endpoints::ASK))
            .json(&AskRequest {
                content: content.to_string(),
            })
            .send()
            .await
            .map_err(network_error)?;

        check_status(response)
            .await?
            .json::<AskResponse>()
            .await
            .map_err(network_error)
    }
}
