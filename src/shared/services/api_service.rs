//! Backend API contract
//!
//! `DocumentApi` is what the app controller talks to. The browser build
//! implements it with gloo-net and XMLHttpRequest (for upload progress),
//! the desktop build with reqwest.

use async_trait::async_trait;

use crate::domain::models::{AskResponse, Document, DocumentFile};
use crate::shared::errors::Result;

/// Endpoint paths, relative to the configured base URL
pub mod endpoints {
    pub const DOCUMENTS: &str = "documents";
    pub const UPLOAD: &str = "upload";
    pub const ASK: &str = "ask";

    /// Path of a single document, filename percent-encoded
    pub fn document(filename: &str) -> String {
        format!("{}/{}", DOCUMENTS, urlencoding::encode(filename))
    }
}

/// Multipart field the backend reads the uploaded file from
pub const UPLOAD_FIELD: &str = "file";

#[async_trait(?Send)]
pub trait DocumentApi {
    /// List uploaded documents
    async fn get_documents(&self) -> Result<Vec<Document>>;

    /// Upload a document; `on_progress` receives non-decreasing percentages
    async fn upload_document(&self, file: DocumentFile, on_progress: &dyn Fn(u8)) -> Result<()>;

    async fn delete_document(&self, filename: &str) -> Result<()>;

    /// Ask a question about the uploaded documents
    async fn ask_question(&self, content: &str) -> Result<AskResponse>;
}

/// Percentage for a transfer, clamped to 0..=100
pub fn progress_percent(sent: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    ((sent.min(total) * 100) / total) as u8
}

/// Reports each percentage at most once and never goes backwards
pub struct ProgressReporter<'a> {
    callback: &'a dyn Fn(u8),
    last: std::cell::Cell<Option<u8>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(callback: &'a dyn Fn(u8)) -> Self {
        Self {
            callback,
            last: std::cell::Cell::new(None),
        }
    }

    pub fn report(&self, sent: u64, total: u64) {
        let percent = progress_percent(sent, total);
        if self.last.get().is_none_or(|last| percent > last) {
            self.last.set(Some(percent));
            (self.callback)(percent);
        }
    }
}
