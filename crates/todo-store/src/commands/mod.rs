//! Loader and Action
//!
//! The read path and the intent-dispatching write path, organized by role.

mod action;
mod form;
mod intent;
mod loader;

pub use action::{action, ActionError, ActionResponse, ErrorBody};
pub use form::{FormSubmission, ID_FIELD, INTENT_FIELD, TODO_FIELD};
pub use intent::Intent;
pub use loader::{loader, LoaderData};
