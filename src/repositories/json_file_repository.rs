use crate::error::{StoreError, StoreResult};
use crate::models::{ContactRecord, Directory};
use crate::repositories::traits::DirectoryRepository;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Version written into every state file.
const STATE_VERSION: u32 = 1;

#[derive(Serialize)]
struct StateFileRef<'a> {
    version: u32,
    contacts: Vec<&'a ContactRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StateFile {
    version: u32,
    contacts: Vec<ContactRecord>,
}

/// Directory repository backed by a JSON file.
///
/// Saves go to a sibling `*.tmp` file that is renamed over the target once
/// fully written, so an interrupted save leaves the previous state intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the file at `path`. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("contacts"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_state(&self, target: &Path, directory: &Directory) -> StoreResult<()> {
        let state = StateFileRef {
            version: STATE_VERSION,
            contacts: directory.all().collect(),
        };

        let file = File::create(target).map_err(|e| StoreError::io(target, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &state)
            .map_err(|e| StoreError::io(target, e.into()))?;
        writer.flush().map_err(|e| StoreError::io(target, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| StoreError::io(target, e))
    }
}

impl DirectoryRepository for JsonFileRepository {
    fn load(&self) -> StoreResult<Directory> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No saved contacts at {}, starting empty", self.path.display());
                return Ok(Directory::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let state: StateFile =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                if e.is_io() {
                    StoreError::io(&self.path, e.into())
                } else {
                    StoreError::corrupt(&self.path, e)
                }
            })?;

        if state.version != STATE_VERSION {
            return Err(StoreError::corrupt(
                &self.path,
                format!("unsupported state version {}", state.version),
            ));
        }

        let directory = Directory::from_records(state.contacts)
            .map_err(|e| StoreError::corrupt(&self.path, e))?;

        info!(
            "Loaded {} contacts from {}",
            directory.len(),
            self.path.display()
        );
        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> StoreResult<()> {
        let temp = self.temp_path();
        debug!("Writing {} contacts to {}", directory.len(), temp.display());

        if let Err(e) = self.write_state(&temp, directory) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", temp.display(), cleanup);
                }
            }
            return Err(e);
        }

        fs::rename(&temp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        info!(
            "Saved {} contacts to {}",
            directory.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, PhoneNumber};
    use tempfile::TempDir;

    fn sample_directory() -> Directory {
        let mut directory = Directory::new();
        let (ann, _) = directory.upsert("Ann").unwrap();
        ann.add_phone(PhoneNumber::new("1111111111").unwrap());
        ann.set_birthday(Birthday::parse("29.02.2000").unwrap());
        directory.upsert("Bob").unwrap();
        directory
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let repo = JsonFileRepository::new("/data/addressbook.json");
        assert_eq!(repo.temp_path(), PathBuf::from("/data/addressbook.json.tmp"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("missing.json"));
        let directory = repo.load().unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));
        let original = sample_directory();

        repo.save(&original).unwrap();
        assert!(!repo.temp_path().exists());

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_saved_file_layout() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));
        repo.save(&sample_directory()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["contacts"][0]["name"], "Ann");
        assert_eq!(value["contacts"][0]["phones"][0], "1111111111");
        assert_eq!(value["contacts"][0]["birthday"], "29.02.2000");
        assert!(value["contacts"][1]["birthday"].is_null());
    }

    #[test]
    fn test_load_rejects_wrong_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, r#"{"version": 2, "contacts": []}"#).unwrap();

        let result = JsonFileRepository::new(&path).load();
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_load_rejects_duplicate_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(
            &path,
            r#"{"version": 1, "contacts": [{"name": "Ann"}, {"name": "Ann"}]}"#,
        )
        .unwrap();

        match JsonFileRepository::new(&path).load() {
            Err(StoreError::Corrupt { reason, .. }) => assert!(reason.contains("Ann")),
            other => panic!("Expected Corrupt error, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_unknown_contact_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(
            &path,
            r#"{"version": 1, "contacts": [{"name": "Ann", "phonez": ["1111111111"]}]}"#,
        )
        .unwrap();

        match JsonFileRepository::new(&path).load() {
            Err(StoreError::Corrupt { reason, .. }) => assert!(reason.contains("phonez")),
            other => panic!("Expected Corrupt error, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_invalid_field_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(
            &path,
            r#"{"version": 1, "contacts": [{"name": "Ann", "phones": ["12-34"]}]}"#,
        )
        .unwrap();

        let result = JsonFileRepository::new(&path).load();
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nope").join("book.json"));

        let result = repo.save(&sample_directory());
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }
}
