//! Browser Storage
//!
//! `window.localStorage` behind the todo-store storage port.

use todo_store::{KeyValueStorage, StoreError, StoreResult};
use wasm_bindgen::{JsCast, JsValue};

/// Handle to the page's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| StoreError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("localStorage is unavailable".to_string()))
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

/// Quota and security failures arrive as DOMExceptions
fn js_error(value: JsValue) -> StoreError {
    let message = if let Some(e) = value.dyn_ref::<web_sys::DomException>() {
        format!("{}: {}", e.name(), e.message())
    } else if let Some(e) = value.dyn_ref::<js_sys::Error>() {
        String::from(e.message())
    } else {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    };
    StoreError::Storage(message)
}
