// Domain layer: plain data exchanged with the backend and shown in the UI
pub mod models;
