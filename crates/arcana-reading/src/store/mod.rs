//! Persistence adapter.
//!
//! Storage is reached only through [`KeyValueStore`], injected by the
//! caller. The draw and reveal code never touch it.

pub mod archive;
pub mod file;
pub mod profile;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use archive::ReadingArchive;
pub use file::FileStore;
pub use profile::UserProfile;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Keys are limited to lowercase ASCII letters, digits, `-`, and `_`.
    #[error("invalid store key: \"{0}\"")]
    InvalidKey(String),

    /// Reading or writing the backing medium failed.
    #[error("storage I/O failed for {key}: {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A stored value could not be encoded or decoded.
    #[error("stored value for {key} is malformed: {source}")]
    Serde {
        /// Key being accessed.
        key: String,
        /// Underlying error.
        source: serde_json::Error,
    },
}

/// Check a key against the allowed alphabet.
pub fn validate_key(key: &str) -> StoreResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

/// String-keyed durable storage.
pub trait KeyValueStore {
    /// Raw value for `key`, or `None` if absent.
    fn load_raw(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save_raw(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`. Returns whether it existed.
    fn remove(&mut self, key: &str) -> StoreResult<bool>;
}

/// Typed access through JSON for any store.
pub trait StoreExt: KeyValueStore {
    /// Decode the value under `key`.
    fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.load_raw(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Serde {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Encode `value` and store it under `key`.
    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(value).map_err(|source| StoreError::Serde {
            key: key.to_string(),
            source,
        })?;
        self.save_raw(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn load_raw(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).load_raw(key)
    }

    fn save_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).save_raw(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<bool> {
        (**self).remove(key)
    }
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn load_raw(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn save_raw(&mut self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;
        Ok(self.values.remove(key).is_some())
    }
}
