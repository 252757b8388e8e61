use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::room::Room;

/// A world definition identified by a string key.
pub trait Keyed {
    /// Human-readable kind, used in error messages.
    const KIND: &'static str;

    /// The entry's own key.
    fn key(&self) -> &str;

    /// Overwrite the entry's own key.
    fn set_key(&mut self, key: String);
}

impl Keyed for Room {
    const KIND: &'static str = "room";

    fn key(&self) -> &str {
        &self.key
    }

    fn set_key(&mut self, key: String) {
        self.key = key;
    }
}

impl Keyed for Item {
    const KIND: &'static str = "item";

    fn key(&self) -> &str {
        &self.key
    }

    fn set_key(&mut self, key: String) {
        self.key = key;
    }
}

/// An ordered, keyed collection of world definitions.
///
/// Serializes as a plain JSON object so payloads and snapshots share a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog<T> {
    entries: BTreeMap<String, T>,
}

/// All rooms of a world, keyed by room key.
pub type Rooms = Catalog<Room>;

/// All items of a world, keyed by item key.
pub type Items = Catalog<Item>;

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T: Keyed> Catalog<T> {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under its own key, replacing any previous one.
    pub fn insert(&mut self, entry: T) {
        self.entries.insert(entry.key().to_string(), entry);
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Whether an entry with this key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Reconcile each entry's own key with the key it is stored under.
    ///
    /// Empty keys are filled from the map key; a conflicting key is an error.
    pub fn normalize_keys(mut self) -> CoreResult<Self> {
        for (map_key, entry) in self.entries.iter_mut() {
            if entry.key().is_empty() {
                entry.set_key(map_key.clone());
            } else if entry.key() != map_key {
                return Err(CoreError::KeyMismatch {
                    kind: T::KIND,
                    map_key: map_key.clone(),
                    key: entry.key().to_string(),
                });
            }
        }
        Ok(self)
    }
}

impl<T: Keyed> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}
