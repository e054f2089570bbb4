//! Shared error types for the biological age engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid board '{name}': {reason}")]
    InvalidBoard { name: String, reason: String },

    #[error("Invalid measurement '{key}': {reason}")]
    InvalidMeasurement { key: String, reason: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
