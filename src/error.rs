use thiserror::Error;

use crate::blog::BlogError;
use crate::config::ConfigError;
use crate::services::{AuthError, MessageError};
use crate::storage::StorageError;

/// Top-level error for code that drives several services at once.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Message store error: {0}")]
    Message(#[from] MessageError),

    #[error("Blog error: {0}")]
    Blog(#[from] BlogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
