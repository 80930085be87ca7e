//! Todo Store
//!
//! Layered architecture:
//! - domain: todo records, list transforms, errors
//! - repository: storage/id ports and the JSON persistence accessor
//! - commands: loader (read path) and action (intent dispatch)
//! - navigation: submission state driving the add-form reset

pub mod commands;
pub mod config;
pub mod domain;
pub mod navigation;
pub mod repository;

pub use commands::{
    action, loader, ActionError, ActionResponse, ErrorBody, FormSubmission, Intent, LoaderData,
    ID_FIELD, INTENT_FIELD, TODO_FIELD,
};
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use domain::{StoreError, StoreResult, Todo};
pub use navigation::{should_clear_add_form, should_reset_add_form, NavigationState};
pub use repository::{
    FileStorage, IdGenerator, KeyValueStorage, MemoryStorage, SequentialIds, TodoRepository,
    UuidGenerator,
};
