pub mod api;
pub mod config;
pub mod error;
pub mod role;
pub mod scene;
