//! Chat Service
//!
//! Minimal messaging backend: a conversation directory, two-party chats with
//! message history, and S3 attachment uploads.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
