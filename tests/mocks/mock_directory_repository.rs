use contact_book::error::{StoreError, StoreResult};
use contact_book::models::Directory;
use contact_book::repositories::DirectoryRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock directory repository for testing.
///
/// Keeps the "saved" directory in memory, can be told to fail saves, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectoryRepository {
    saved: Arc<Mutex<Option<Directory>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockDirectoryRepository {
    /// Create a repository with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `directory`.
    pub fn with_directory(directory: Directory) -> Self {
        let repo = Self::new();
        *repo.saved.lock().unwrap() = Some(directory);
        repo
    }

    /// Make every following `save` fail with an I/O error.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The most recently saved directory.
    pub fn saved(&self) -> Option<Directory> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl DirectoryRepository for MockDirectoryRepository {
    fn load(&self) -> StoreResult<Directory> {
        self.track_call("load");
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, directory: &Directory) -> StoreResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StoreError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }

        *self.saved.lock().unwrap() = Some(directory.clone());
        Ok(())
    }
}
