//! RAG Document Chat - Main Entry Point
//!
//! The browser build talks to the backend configured at compile time.
//! The desktop build takes it from the command line or the environment.

use rag_document_chat::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] RAG Document Chat - WASM initialized!".into());
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("[WASM] logger already set: {e}").into());
    }

    let config = rag_document_chat::config::AppConfig::from_build_env();
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use rag_document_chat::config::DesktopArgs;

    let args = DesktopArgs::parse();

    // Initialize tracing BEFORE launch so dioxus keeps our subscriber
    let filter = tracing_subscriber::EnvFilter::try_new(&args.log_filter)
        .with_context(|| format!("invalid log filter {:?}", args.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.config();
    tracing::info!(api = %config.api_base_url, "Starting RAG Document Chat...");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}
