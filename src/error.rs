//! Domain-specific error types for sessionscope

use thiserror::Error;

/// Main error type for the sessionscope analysis core
#[derive(Error, Debug)]
pub enum SessionScopeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for SessionScopeError {
    fn from(err: anyhow::Error) -> Self {
        SessionScopeError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SessionScopeError {
    fn from(err: serde_json::Error) -> Self {
        SessionScopeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for SessionScopeError {
    fn from(err: reqwest::Error) -> Self {
        SessionScopeError::Provider {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionScopeError>;
