// Application state and the controller that drives it

pub mod app_state;
pub mod controller;
pub mod store;

pub use app_state::{AppState, ErrorBanner, UploadStatus};
pub use controller::AppController;
pub use store::{ConfirmPrompt, DialogConfirm, ErrorTimer, SpawnTimer, StateStore};
