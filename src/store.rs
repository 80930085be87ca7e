//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_store::{ActionError, NavigationState, StoreError, Todo};

/// Error shown in the page banner
#[derive(Clone, Debug, PartialEq)]
pub struct PageError {
    pub status: u16,
    pub message: String,
}

impl From<&ActionError> for PageError {
    fn from(e: &ActionError) -> Self {
        Self {
            status: e.status(),
            message: e.body().message,
        }
    }
}

impl From<&StoreError> for PageError {
    fn from(e: &StoreError) -> Self {
        Self {
            status: 500,
            message: e.to_string(),
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos as last returned by the loader
    pub todos: Vec<Todo>,
    /// Whether a form is being handled, and with which intent
    pub navigation: NavigationState,
    /// Last loader/action failure, cleared by the next success
    pub error: Option<PageError>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered list with fresh loader data
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

pub fn store_set_navigation(store: &AppStore, navigation: NavigationState) {
    *store.navigation().write() = navigation;
}

pub fn store_set_error(store: &AppStore, error: Option<PageError>) {
    *store.error().write() = error;
}
