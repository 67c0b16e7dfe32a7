//! Structured logging for the document chat client
//!
//! Every user-triggered backend call logs through these helpers so that
//! events carry the same `operation` field whether they end up in the
//! browser console or in a desktop terminal.

use crate::shared::errors::AppError;

/// Operation tag attached to every log event
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    DocumentFetch,
    Upload,
    Delete,
    Question,
    Theme,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::DocumentFetch => "document_fetch",
            LogOperation::Upload => "upload",
            LogOperation::Delete => "delete",
            LogOperation::Question => "question",
            LogOperation::Theme => "theme",
        }
    }
}

/// Log document list refresh result
pub fn log_documents_loaded(count: usize) {
    tracing::info!(
        operation = LogOperation::DocumentFetch.as_str(),
        document_count = count,
        "Document list refreshed"
    );
}

pub fn log_upload_start(filename: &str, size: u64) {
    tracing::info!(
        operation = LogOperation::Upload.as_str(),
        filename = filename,
        size_bytes = size,
        "Uploading document"
    );
}

pub fn log_upload_success(filename: &str) {
    tracing::info!(
        operation = LogOperation::Upload.as_str(),
        filename = filename,
        "Document uploaded"
    );
}

pub fn log_delete_success(filename: &str) {
    tracing::info!(
        operation = LogOperation::Delete.as_str(),
        filename = filename,
        "Document deleted"
    );
}

/// Log delete declined at the confirmation prompt
pub fn log_delete_declined(filename: &str) {
    tracing::debug!(
        operation = LogOperation::Delete.as_str(),
        filename = filename,
        "Delete cancelled by user"
    );
}

pub fn log_question_answered(source_count: usize) {
    tracing::info!(
        operation = LogOperation::Question.as_str(),
        source_count = source_count,
        "Question answered"
    );
}

/// Log a failed backend call
pub fn log_operation_error(operation: LogOperation, error: &AppError) {
    tracing::error!(
        operation = operation.as_str(),
        error = %error,
        "Operation failed"
    );
}

/// Log an action rejected because the same kind is still running
pub fn log_operation_rejected(operation: LogOperation) {
    tracing::warn!(
        operation = operation.as_str(),
        "Rejected: operation already in flight"
    );
}

pub fn log_theme_applied(theme: &str) {
    tracing::debug!(
        operation = LogOperation::Theme.as_str(),
        theme = theme,
        "Theme applied"
    );
}
