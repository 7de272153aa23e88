//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided date is not in `DD.MM.YYYY` form or is not a real date.
    InvalidDate(String),

    /// The provided tag fails the normalized tag pattern.
    InvalidTag(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {} (expected exactly 10 digits)",
                phone
            ),
            Self::InvalidDate(date) => {
                write!(f, "Invalid date format: {} (expected DD.MM.YYYY)", date)
            }
            Self::InvalidTag(tag) => write!(f, "Invalid tag: '{}'", tag),
        }
    }
}

impl std::error::Error for ValidationError {}
