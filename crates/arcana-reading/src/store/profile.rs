//! The user profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use arcana_core::SpreadKind;

use crate::reading::Querent;

use super::{KeyValueStore, StoreExt, StoreResult};

/// Key the profile is stored under.
pub const PROFILE_KEY: &str = "user-profile";

/// What the user has told us about themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: Option<String>,
    /// Birthdate.
    pub birthdate: Option<NaiveDate>,
    /// Spread to use when none is given.
    pub favourite_spread: Option<SpreadKind>,
}

impl UserProfile {
    /// Load the profile, or an empty one if none was saved.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> StoreResult<Self> {
        Ok(store.load(PROFILE_KEY)?.unwrap_or_default())
    }

    /// Persist the profile.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> StoreResult<()> {
        store.save(PROFILE_KEY, self)
    }

    /// Snapshot for attaching to a reading. Needs at least a name.
    pub fn querent(&self) -> Option<Querent> {
        let name = self.name.as_deref()?.trim();
        (!name.is_empty()).then(|| Querent {
            name: name.to_string(),
            birthdate: self.birthdate,
        })
    }
}
