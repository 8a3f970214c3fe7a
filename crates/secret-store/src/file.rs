//! File-backed secret store.

use std::fs;
use std::io;
use std::path::PathBuf;

use config::MNEMONIC_STORAGE_KEY;

use crate::{SecretStore, StoreError};

/// Secret store backed by a single plain-text file.
///
/// The file lives under the caller-supplied data directory and is named
/// by [`config::MNEMONIC_STORAGE_KEY`]. Writes go through a temp file and
/// rename, so a crash mid-write never leaves a truncated secret.
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    dir: PathBuf,
}

impl FileSecretStore {
    /// Creates a store rooted at `dir`. The directory is created on the
    /// first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the secret file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(MNEMONIC_STORAGE_KEY)
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!(".{MNEMONIC_STORAGE_KEY}.tmp"))
    }
}

impl SecretStore for FileSecretStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path()) {
            Ok(contents) => {
                let secret = contents.trim_end_matches(['\r', '\n']);
                if secret.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(secret.to_owned()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read(e)),
        }
    }

    fn store(&self, secret: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(StoreError::Write)?;
        let tmp = self.temp_path();
        fs::write(&tmp, secret).map_err(StoreError::Write)?;
        fs::rename(&tmp, self.path()).map_err(StoreError::Write)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_returns_none_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = FileSecretStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn store_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileSecretStore::new(dir.path());
        store.store("abandon ability able").unwrap();
        assert_eq!(
            store.load().unwrap().as_deref(),
            Some("abandon ability able")
        );
        assert!(store.path().is_file());
    }

    #[test]
    fn store_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("wallet").join("data");
        let store = FileSecretStore::new(&nested);
        store.store("secret words").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("secret words"));
    }

    #[test]
    fn store_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = FileSecretStore::new(dir.path());
        store.store("old").unwrap();
        store.store("new").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn trailing_newline_is_stripped() {
        let dir = TempDir::new().unwrap();
        let store = FileSecretStore::new(dir.path());
        fs::write(store.path(), "hand-edited secret\n").unwrap();
        assert_eq!(
            store.load().unwrap().as_deref(),
            Some("hand-edited secret")
        );
    }

    #[test]
    fn empty_file_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileSecretStore::new(dir.path());
        fs::write(store.path(), "").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = FileSecretStore::new(dir.path());
        store.store("secret").unwrap();
        assert!(!store.temp_path().exists());
    }
}
