// Backend API client
// The trait is shared; each target brings its own HTTP stack

pub mod api_service;

#[cfg(target_arch = "wasm32")]
pub mod web_client;
#[cfg(not(target_arch = "wasm32"))]
pub mod native_client;

pub use api_service::{endpoints, DocumentApi, ProgressReporter};

#[cfg(target_arch = "wasm32")]
pub use web_client::WebApiClient as ApiClient;
#[cfg(not(target_arch = "wasm32"))]
pub use native_client::NativeApiClient as ApiClient;
