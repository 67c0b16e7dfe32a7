//! Seams between the controller and its host
//!
//! In the app these are backed by a Dioxus signal, the browser's confirm
//! dialog and a spawned sleep; tests swap in plain Rust doubles.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::prelude::*;

use super::app_state::AppState;

/// Shared, explicitly owned application state
pub trait StateStore: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
}

impl StateStore for Signal<AppState> {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.with(f)
    }
}

impl StateStore for Rc<RefCell<AppState>> {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }
}

/// Interactive yes/no question
#[async_trait(?Send)]
pub trait ConfirmPrompt {
    async fn confirm(&self, message: &str) -> bool;
}

/// Runs a callback once after a delay
pub trait ErrorTimer {
    fn schedule(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>);
}

/// `window.confirm`, through the Dioxus document bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogConfirm;

#[async_trait(?Send)]
impl ConfirmPrompt for DialogConfirm {
    async fn confirm(&self, message: &str) -> bool {
        let quoted = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
        let script = format!("return window.confirm({quoted});");
        match document::eval(&script).await {
            Ok(result) => result.as_bool().unwrap_or(false),
            Err(e) => {
                tracing::warn!("Confirm dialog unavailable: {:?}", e);
                false
            }
        }
    }
}

/// Timer backed by a task on the Dioxus runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimer;

impl ErrorTimer for SpawnTimer {
    fn schedule(&self, delay: Duration, on_elapsed: Box<dyn FnOnce()>) {
        spawn(async move {
            sleep(delay).await;
            on_elapsed();
        });
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
