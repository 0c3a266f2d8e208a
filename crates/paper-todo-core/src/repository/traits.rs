//! Repository Layer - Core Traits
//!
//! The browser's `localStorage` and the in-memory test store both fit
//! behind this interface.

use crate::error::StorageError;

/// String slots addressed by fixed keys
///
/// Synchronous: the only backend is a blocking browser API on a
/// single-threaded runtime.
pub trait KeyValueStore {
    /// Read a slot; `Ok(None)` when it was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
