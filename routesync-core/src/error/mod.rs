//! Unified error handling for route synchronisation

use aws_sdk_apigateway::error::DisplayErrorContext;
use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that abort a sync run
#[derive(Error, Debug)]
pub enum SyncError {
    /// Desired-path configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A route path failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required remote entity (gateway, handler) does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A remote control-plane call failed
    #[error("{operation} failed: {message}")]
    Remote {
        operation: &'static str,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl SyncError {
    /// Wrap a remote SDK failure, keeping the full error chain in the message.
    pub fn remote<E>(operation: &'static str, err: E) -> Self
    where
        E: std::error::Error,
    {
        SyncError::Remote {
            operation,
            message: DisplayErrorContext(&err).to_string(),
        }
    }

    /// True for errors raised before any remote call is attempted.
    pub fn is_config(&self) -> bool {
        matches!(self, SyncError::Config(_) | SyncError::Validation(_))
    }
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Config(format!("invalid JSON: {}", err))
    }
}
