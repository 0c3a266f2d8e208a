//! Browser Storage
//!
//! `localStorage` behind the core's key-value interface.

use paper_todo_core::{KeyValueStore, MemoryStore, StorageError};

pub enum BrowserStorage {
    Local(web_sys::Storage),
    /// Private mode or storage disabled: keep working for this session only
    Memory(MemoryStore),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                log::warn!("localStorage unavailable, changes will not survive a reload");
                BrowserStorage::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Backend(format!("{:?}", e))),
            BrowserStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(format!("{:?}", e))),
            BrowserStorage::Memory(memory) => memory.set(key, value),
        }
    }
}
