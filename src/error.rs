//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors surfaced by address book, record and service operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Contact, phone, tag or note is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Phone is not exactly ten digits
    #[error("Invalid phone number: {0} (expected exactly 10 digits)")]
    InvalidPhone(String),

    /// Birthday string does not parse as DD.MM.YYYY
    #[error("Invalid date format: {0} (expected DD.MM.YYYY)")]
    InvalidFormat(String),

    /// Tag fails the normalized tag pattern or is empty
    #[error("Invalid tag: '{0}'")]
    InvalidTag(String),

    /// A contact or note with this name already exists
    #[error("Already exists: {0}")]
    DuplicateName(String),

    /// Book structure violates an internal invariant
    #[error("Malformed address book: {0}")]
    MalformedState(String),
}

impl BookError {
    /// `NotFound` for a contact name.
    pub fn contact_not_found(name: &str) -> Self {
        Self::NotFound(format!("contact '{}'", name))
    }

    /// `NotFound` for a note on a contact.
    pub fn note_not_found(contact: &str, note: &str) -> Self {
        Self::NotFound(format!("note '{}' for contact '{}'", note, contact))
    }
}

impl From<ValidationError> for BookError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidPhone(phone) => Self::InvalidPhone(phone),
            ValidationError::InvalidDate(date) => Self::InvalidFormat(date),
            ValidationError::InvalidTag(tag) => Self::InvalidTag(tag),
        }
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode or decode JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
