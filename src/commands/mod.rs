//! Command parsing and handling.
//!
//! This is the only layer that turns errors into user-facing text; the
//! directory and its records just return typed errors.

pub mod handlers;
pub mod parser;

pub use handlers::{CommandHandler, Reply};
pub use parser::Command;
