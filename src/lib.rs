// Browser and desktop builds share everything below
pub mod app;
pub mod config;
pub mod domain;
pub mod shared;
