// Custom Dioxus hooks
pub mod use_app;
pub mod use_scroll_to_end;

pub use use_app::{use_app_controller, use_app_state, Controller};
pub use use_scroll_to_end::use_scroll_to_end;
