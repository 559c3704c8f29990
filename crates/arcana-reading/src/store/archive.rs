//! The saved-readings list.

use log::debug;

use crate::reading::Reading;

use super::{KeyValueStore, StoreExt, StoreResult};

/// Key the list is stored under.
pub const SAVED_READINGS_KEY: &str = "saved-readings";

/// Oldest readings are dropped beyond this many.
pub const MAX_SAVED_READINGS: usize = 50;

/// Saved readings, newest first, on top of any store.
#[derive(Debug)]
pub struct ReadingArchive<S> {
    store: S,
}

impl<S: KeyValueStore> ReadingArchive<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// All saved readings, newest first.
    pub fn list(&self) -> StoreResult<Vec<Reading>> {
        Ok(self.store.load(SAVED_READINGS_KEY)?.unwrap_or_default())
    }

    /// Save a reading at the front of the list, replacing an older copy
    /// with the same id.
    pub fn save(&mut self, reading: &Reading) -> StoreResult<()> {
        let mut readings = self.list()?;
        readings.retain(|r| r.id != reading.id);
        readings.insert(0, reading.clone());
        readings.truncate(MAX_SAVED_READINGS);
        debug!("saving reading {} ({} in archive)", reading.id, readings.len());
        self.store.save(SAVED_READINGS_KEY, &readings)
    }

    /// Find a reading by id prefix.
    pub fn get(&self, id_prefix: &str) -> StoreResult<Option<Reading>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|r| r.id.matches_prefix(id_prefix)))
    }

    /// Delete the first reading matching an id prefix. Returns whether one
    /// was removed.
    pub fn remove(&mut self, id_prefix: &str) -> StoreResult<bool> {
        let mut readings = self.list()?;
        let Some(index) = readings.iter().position(|r| r.id.matches_prefix(id_prefix)) else {
            return Ok(false);
        };
        readings.remove(index);
        self.store.save(SAVED_READINGS_KEY, &readings)?;
        Ok(true)
    }
}
