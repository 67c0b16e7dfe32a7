// Utility functions
// Formatting helpers shared by the sidebar and upload widgets

pub mod format;

pub use format::{file_extension, file_icon, format_file_size, DEFAULT_FILE_ICON};
