//! Engine-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Invalid chronological age: {value}")]
    InvalidChronologicalAge { value: f64 },

    #[error("Reference table error: {message}")]
    ReferenceTable { message: String },

    #[error("Invalid calculation request: {message}")]
    RequestError { message: String },

    #[error("Calculation task failed: {message}")]
    TaskError { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl EngineError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn reference_table(message: impl Into<String>) -> Self {
        Self::ReferenceTable {
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::RequestError {
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Reject non-finite chronological ages, any finite real is accepted
pub fn ensure_chronological_age(value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::InvalidChronologicalAge { value })
    }
}
