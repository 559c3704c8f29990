//! Directory-backed store: one JSON file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

use super::{KeyValueStore, StoreError, StoreResult, validate_key};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StoreError {
    warn!("store I/O failure on {key}: {source}");
    StoreError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn load_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn save_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| io_error(key, e))?;
        // Write beside the target and rename so readers never see half a file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| io_error(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_error(key, e))
    }

    fn remove(&mut self, key: &str) -> StoreResult<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::store::StoreExt;

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        store.save("greeting", "hello").unwrap();
        assert!(dir.path().join("nested/greeting.json").exists());
        let back: Option<String> = store.load("greeting").unwrap();
        assert_eq!(back.as_deref(), Some("hello"));
    }

    #[test]
    fn missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.load_raw("nothing").unwrap(), None);
    }

    #[test]
    fn remove_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save_raw("gone", "1").unwrap();
        assert!(store.remove("gone").unwrap());
        assert!(!store.remove("gone").unwrap());
        assert!(!dir.path().join("gone.json").exists());
    }

    #[test]
    fn path_traversal_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(matches!(
            store.save_raw("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
    }

    #[test]
    fn unwritable_root_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut store = FileStore::new(&blocker);
        assert!(matches!(
            store.save_raw("key", "x"),
            Err(StoreError::Io { .. })
        ));
    }
}
