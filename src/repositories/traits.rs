use crate::error::StoreResult;
use crate::models::Directory;

/// Repository for the persisted directory.
///
/// Provides abstraction over where the directory lives between sessions,
/// enabling different implementations (JSON file, in-memory mock).
pub trait DirectoryRepository {
    /// Load the saved directory.
    ///
    /// Returns an empty directory when nothing has been saved yet. State
    /// that exists but cannot be decoded is an error, never an empty result.
    fn load(&self) -> StoreResult<Directory>;

    /// Replace the saved state with `directory`.
    fn save(&self, directory: &Directory) -> StoreResult<()>;
}
