//! Planner-specific error types

use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid player count: {count} (at least one player is required)")]
    InvalidPlayerCount { count: u32 },

    #[error("Invalid number for {field}: {value}")]
    InvalidNumber { field: String, value: String },

    #[error("Negative value for {field}: {value}")]
    NegativeValue { field: String, value: String },

    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("Clipboard write failed: {message}")]
    ClipboardFailed { message: String },

    #[error("Configuration error: {field} = {value}")]
    Config { field: String, value: String },

    #[error("Copy needs a running async runtime")]
    NoRuntime,

    #[error("Unrecognized command: {input}")]
    UnknownCommand { input: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl PlannerError {
    pub fn config(field: impl Into<String>, value: impl Into<String>) -> Self {
        PlannerError::Config {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        PlannerError::ClipboardFailed {
            message: message.into(),
        }
    }

    /// Whether the error came from a bad user-entered value
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidPlayerCount { .. }
                | PlannerError::InvalidNumber { .. }
                | PlannerError::NegativeValue { .. }
                | PlannerError::SharedError(_)
        )
    }
}

pub type PlannerResult<T> = Result<T, PlannerError>;
