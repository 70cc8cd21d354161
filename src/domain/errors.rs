//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating contact fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace only.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name must be a non-empty string."),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be 10 digits, got: {}", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY, got: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
