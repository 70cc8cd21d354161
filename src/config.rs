//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file. Every setting has a default, so
//! an empty environment yields a working configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the saved contacts.
pub const DEFAULT_CONTACTS_PATH: &str = "addressbook.json";

/// Default size of the upcoming-birthdays window, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Largest accepted birthday window; every birthday falls within a year.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where contacts are loaded from and saved to (default: addressbook.json)
    pub contacts_path: PathBuf,

    /// Days ahead that `birthdays` looks (default: 7)
    pub birthday_window_days: u32,

    /// Maximum number of "did you mean" names to offer (default: 3)
    pub max_suggestions: usize,

    /// Minimum similarity for a suggested name (0-100, default: 50)
    pub suggestion_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: State file path (default: addressbook.json)
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming birthday window (default: 7, max 366)
    /// - `MAX_SUGGESTIONS`: Max suggested names on a miss (default: 3)
    /// - `SUGGESTION_THRESHOLD`: Min suggestion confidence (default: 50)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let contacts_path = env::var("CONTACT_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.contacts_path);

        if contacts_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let max_suggestions = Self::parse_env_usize("MAX_SUGGESTIONS", defaults.max_suggestions)?;
        let suggestion_threshold =
            Self::parse_env_u8("SUGGESTION_THRESHOLD", defaults.suggestion_threshold)?;

        if suggestion_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SUGGESTION_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            contacts_path,
            birthday_window_days,
            max_suggestions,
            suggestion_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_path: PathBuf::from(DEFAULT_CONTACTS_PATH),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            max_suggestions: 3,
            suggestion_threshold: 50,
            log_level: "error".to_string(),
        }
    }
}
