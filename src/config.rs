//! Runtime configuration
//!
//! The web build bakes the backend URL in at compile time (`RAG_API_URL`).
//! The desktop build reads it from CLI flags or the environment.

use std::time::Duration;

/// Backend used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// How long the error banner stays visible
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the RAG backend, without trailing slash
    pub api_base_url: String,
    pub error_display: Duration,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            error_display: ERROR_DISPLAY_DURATION,
        }
    }

    /// Configuration baked in at compile time
    pub fn from_build_env() -> Self {
        Self::new(option_env!("RAG_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Command line for the desktop shell
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, clap::Parser)]
#[command(name = "rag-document-chat", version, about = "Chat with your documents")]
pub struct DesktopArgs {
    /// Base URL of the RAG backend
    #[arg(long, env = "RAG_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// tracing filter directive (e.g. "info,rag_document_chat=debug")
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl DesktopArgs {
    pub fn config(&self) -> AppConfig {
        AppConfig::new(&self.api_url)
    }
}
