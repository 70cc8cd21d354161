//! Persistence for the contact directory.
//!
//! The directory is loaded once at startup and saved once on exit. The
//! [`DirectoryRepository`] trait hides where that state lives.

mod json_file_repository;
mod traits;

pub use json_file_repository::JsonFileRepository;
pub use traits::DirectoryRepository;

use crate::error::StoreResult;
use crate::models::Directory;
use std::path::Path;

/// Save `directory` as JSON at `path`, replacing any previous content.
pub fn save(directory: &Directory, path: impl AsRef<Path>) -> StoreResult<()> {
    JsonFileRepository::new(path.as_ref()).save(directory)
}

/// Load a directory from `path`, or an empty one if the file does not exist.
pub fn load(path: impl AsRef<Path>) -> StoreResult<Directory> {
    JsonFileRepository::new(path.as_ref()).load()
}
