pub mod chat;

pub use chat::ChatPage;
