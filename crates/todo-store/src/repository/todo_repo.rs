//! Todo Repository
//!
//! The persistence accessor: the whole list is read and written as one JSON
//! array under a single key. There are no partial writes.

use super::{IdGenerator, KeyValueStorage, UuidGenerator};
use crate::config::StoreConfig;
use crate::domain::{StoreError, StoreResult, Todo};

pub struct TodoRepository<S, G = UuidGenerator> {
    storage: S,
    ids: G,
    config: StoreConfig,
}

impl<S: KeyValueStorage> TodoRepository<S> {
    /// Repository on the default `todos` key with random UUIDs
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, UuidGenerator, StoreConfig::default())
    }
}

impl<S: KeyValueStorage, G: IdGenerator> TodoRepository<S, G> {
    pub fn with_config(storage: S, ids: G, config: StoreConfig) -> Self {
        Self {
            storage,
            ids,
            config,
        }
    }

    /// Same storage key, different id source
    pub fn with_ids<H: IdGenerator>(self, ids: H) -> TodoRepository<S, H> {
        TodoRepository {
            storage: self.storage,
            ids,
            config: self.config,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn next_id(&self) -> String {
        self.ids.next_id()
    }

    /// Read the full list. A missing key is an empty list; malformed JSON is an error.
    pub fn load_todos(&self) -> StoreResult<Vec<Todo>> {
        let key = self.storage_key();
        let Some(raw) = self.storage.get_item(key)? else {
            log::debug!("no value at {key:?}, starting empty");
            return Ok(Vec::new());
        };
        let todos: Vec<Todo> = serde_json::from_str(&raw).map_err(StoreError::Parse)?;
        log::debug!("loaded {} todos from {key:?}", todos.len());
        Ok(todos)
    }

    /// Overwrite the stored list with `todos`
    pub fn save_todos(&self, todos: &[Todo]) -> StoreResult<()> {
        let key = self.storage_key();
        let raw = serde_json::to_string(todos).map_err(StoreError::Serialize)?;
        self.storage.set_item(key, &raw)?;
        log::debug!("saved {} todos to {key:?}", todos.len());
        Ok(())
    }
}
