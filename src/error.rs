//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while executing a user command.
///
/// All of these are recoverable: the session reports them and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A name, phone or birthday argument failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact with the given name exists
    #[error("Contact not found: {name}")]
    NotFound {
        name: String,
        /// Existing names that look similar, best first
        suggestions: Vec<String>,
    },

    /// The contact exists but has no birthday
    #[error("No birthday set for {0}")]
    NoBirthday(String),

    /// Missing arguments for a known command
    #[error("Invalid arguments, usage: {usage}")]
    InvalidArguments { usage: &'static str },

    /// The command word is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl CommandError {
    /// The text shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => format!("Error: {}", e),
            Self::NotFound { suggestions, .. } if suggestions.is_empty() => {
                "Error: Contact not found.".to_string()
            }
            Self::NotFound { suggestions, .. } => format!(
                "Error: Contact not found. Did you mean: {}?",
                suggestions.join(", ")
            ),
            Self::NoBirthday(name) => format!("Error: No birthday set for {}.", name),
            Self::InvalidArguments { usage } => {
                format!("Error: Invalid input. Usage: {}", usage)
            }
            Self::UnknownCommand(_) => "Invalid command.".to_string(),
        }
    }
}

/// Errors that can occur while loading or saving the directory.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the state file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state file exists but cannot be decoded
    #[error("Corrupt state file {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Corrupt {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
