use std::fmt;
use thiserror::Error;

/// User actions that hold a busy flag while in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Delete,
    Question,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Upload => "upload",
            Operation::Delete => "delete",
            Operation::Question => "question",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Http { status: u16, detail: Option<String> },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Could not read file: {0}")]
    FileRead(String),

    #[error("Browser API error: {0}")]
    Browser(String),

    #[error("Another {0} is already in progress")]
    OperationInFlight(Operation),
}

impl AppError {
    /// Human-readable detail supplied by the server, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Http { detail, .. } => detail.as_deref().filter(|d| !d.trim().is_empty()),
            _ => None,
        }
    }

    /// Build an HTTP error from a response body, keeping a string `detail` field
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail")?.as_str().map(str::to_string));
        AppError::Http { status, detail }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from_fastapi_body() {
        let err = AppError::from_response(413, r#"{"detail":"File too large"}"#);
        assert_eq!(err.detail(), Some("File too large"));
        assert_eq!(err.to_string(), "HTTP 413: File too large");
    }

    #[test]
    fn test_non_string_detail_is_ignored() {
        let err = AppError::from_response(422, r#"{"detail":[{"loc":["body"],"msg":"x"}]}"#);
        assert_eq!(err.detail(), None);

        let err = AppError::from_response(500, "Internal Server Error");
        assert_eq!(err.detail(), None);
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_only_http_errors_carry_detail() {
        assert_eq!(AppError::Network("refused".into()).detail(), None);
        assert_eq!(
            AppError::OperationInFlight(Operation::Upload).to_string(),
            "Another upload is already in progress"
        );
    }
}
