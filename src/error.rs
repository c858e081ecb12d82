//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// A phone number was not exactly ten decimal digits
    #[error("Invalid phone number format.")]
    InvalidPhoneFormat,

    /// A birthday did not match DD.MM.YYYY or was not a real date
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat,

    /// The persisted snapshot could not be restored
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactError {
    /// Check if this is a field validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidPhoneFormat | Self::InvalidDateFormat)
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;
