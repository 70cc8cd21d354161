//! Contact Book - an interactive personal contact directory.
//!
//! Stores named contacts with phone numbers and optional birthdays, answers
//! lookups, and lists birthdays coming up within a configurable window.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone number, birthday)
//! - **models**: Contact records and the ordered directory
//! - **repositories**: Loading and saving the directory
//! - **commands**: Parsing input lines and running them against the directory
//! - **matching**: "Did you mean" suggestions for unknown names
//! - **session**: The interactive loop tying it together
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Command, CommandHandler, Reply};
pub use config::Config;
pub use domain::{
    validate_birthday, validate_name, validate_phone, Birthday, Name, PhoneNumber,
    ValidationError,
};
pub use error::{CommandError, ConfigError, StoreError};
pub use matching::NameMatcher;
pub use models::{ContactRecord, Directory, Upsert};
pub use repositories::{DirectoryRepository, JsonFileRepository};
pub use session::run_session;
