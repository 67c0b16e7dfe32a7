//! Upload widget
//!
//! Drop target wrapped around a hidden file input. Only the first file of
//! a selection or drop is forwarded.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

use crate::domain::models::{accept_attribute, DocumentFile};
use crate::shared::errors::AppError;

const INPUT_ID: &str = "document-upload-input";

/// Only the first file of a multi-file selection or drop is used
pub fn first_file<T>(files: impl IntoIterator<Item = T>) -> Option<T> {
    files.into_iter().next()
}

/// Read the first picked or dropped file into memory
async fn first_document(files: Vec<FileData>) -> Option<Result<DocumentFile, AppError>> {
    let file = first_file(files)?;
    let filename = file.name();
    let document = match file.read_bytes().await {
        Ok(bytes) => Ok(DocumentFile::new(filename, bytes.to_vec())),
        Err(e) => Err(AppError::FileRead(format!("{filename}: {e}"))),
    };
    Some(document)
}

#[component]
pub fn FileUpload(
    is_uploading: bool,
    progress: u8,
    on_upload: EventHandler<DocumentFile>,
    on_error: EventHandler<AppError>,
) -> Element {
    let mut is_drag_over = use_signal(|| false);

    let forward = move |files: Vec<FileData>| {
        spawn(async move {
            match first_document(files).await {
                Some(Ok(document)) => on_upload.call(document),
                Some(Err(e)) => on_error.call(e),
                None => {}
            }
        });
    };

    let zone_class = match (is_uploading, is_drag_over()) {
        (true, _) => "c-upload c-upload--busy",
        (false, true) => "c-upload c-upload--drag-over",
        (false, false) => "c-upload",
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragenter: move |evt| {
                evt.prevent_default();
                is_drag_over.set(true);
            },
            ondragover: move |evt| {
                evt.prevent_default();
                is_drag_over.set(true);
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                is_drag_over.set(false);
            },
            ondrop: move |evt| {
                evt.prevent_default();
                is_drag_over.set(false);
                if !is_uploading {
                    forward(evt.files());
                }
            },

            input {
                id: INPUT_ID,
                class: "c-upload__input",
                r#type: "file",
                accept: accept_attribute(),
                disabled: is_uploading,
                onchange: move |evt| forward(evt.files()),
            }

            label {
                class: "c-upload__label",
                r#for: INPUT_ID,
                if is_uploading {
                    div { class: "c-upload__status",
                        span { class: "c-upload__spinner" }
                        span { class: "c-upload__text", "Uploading... {progress}%" }
                    }
                    div { class: "c-upload__progress",
                        div {
                            class: "c-upload__progress-bar",
                            style: "width: {progress}%",
                        }
                    }
                } else {
                    span { class: "c-upload__icon", "📤" }
                    span { class: "c-upload__text", "Drop a file or click to upload" }
                    span { class: "c-upload__hint", "PDF, TXT, CSV, DOC, DOCX, MD, HTML" }
                }
            }
        }
    }
}
