// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod document;
pub mod message;
pub mod theme;

pub use document::{accept_attribute, Document, DocumentFile, ACCEPTED_EXTENSIONS};
pub use message::{AskRequest, AskResponse, ChatMessage, Role, Source, NO_PAGE};
pub use theme::{Theme, UnknownTheme};
