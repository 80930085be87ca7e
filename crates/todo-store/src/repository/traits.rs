//! Repository Layer - Core Traits
//!
//! Ports for the two capabilities the loader and action need from the
//! outside world: a string key-value store and a source of fresh ids.

use crate::domain::StoreResult;

/// Synchronous string key-value storage (the shape of `window.localStorage`)
///
/// Implementations: browser local storage, in-memory, one-file-per-key.
pub trait KeyValueStorage {
    /// Read the value at `key`, `None` when the key was never written
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value at `key`
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Source of unique record identifiers
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
