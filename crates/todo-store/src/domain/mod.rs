//! Domain Layer
//!
//! Todo records, the list transforms intents apply, and store errors.
//! This layer has no storage or browser dependencies.

mod error;
mod todo;

pub use error::{StoreError, StoreResult};
pub use todo::{push_todo, remove_todo, toggle_todo, Todo};
