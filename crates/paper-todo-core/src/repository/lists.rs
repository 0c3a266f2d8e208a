//! List Repository
//!
//! Reads both lists once at startup and overwrites both after every
//! mutation. A missing or corrupt slot loads as an empty list.

use serde::de::DeserializeOwned;

use super::traits::KeyValueStore;
use crate::config::StorageKeys;
use crate::domain::{CompletedItem, Item};
use crate::error::PersistError;
use crate::store::ItemStore;

pub struct ListRepository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    keys: &'a StorageKeys,
}

impl<'a, S: KeyValueStore + ?Sized> ListRepository<'a, S> {
    pub fn new(store: &'a S, keys: &'a StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn load(&self) -> ItemStore {
        let active: Vec<Item> = self.load_slot(&self.keys.active_key);
        let completed: Vec<CompletedItem> = self.load_slot(&self.keys.completed_key);
        log::info!("Loaded {} active and {} completed items", active.len(), completed.len());
        ItemStore::from_lists(active, completed)
    }

    /// Full overwrite of both slots. Blank active items are never written.
    pub fn save(&self, items: &ItemStore) -> Result<(), PersistError> {
        let active: Vec<&Item> = items.active().iter().filter(|item| !item.is_blank()).collect();
        let active_json = serde_json::to_string(&active)?;
        let completed_json = serde_json::to_string(items.completed())?;
        self.store.set(&self.keys.active_key, &active_json)?;
        self.store.set(&self.keys.completed_key, &completed_json)?;
        Ok(())
    }

    fn load_slot<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read '{}': {}", key, e);
                return Vec::new();
            }
        };
        // A literal "null" counts as an empty slot too
        match serde_json::from_str::<Option<Vec<T>>>(&raw) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                log::warn!("Discarding malformed '{}': {}", key, e);
                Vec::new()
            }
        }
    }
}
