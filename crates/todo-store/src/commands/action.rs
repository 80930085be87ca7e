//! Action
//!
//! Write path: one intent per submission, one load and one save per intent.

use serde::Serialize;

use super::{FormSubmission, Intent, ID_FIELD, INTENT_FIELD, TODO_FIELD};
use crate::domain::{push_todo, remove_todo, toggle_todo, StoreError, Todo};
use crate::repository::{IdGenerator, KeyValueStorage, TodoRepository};

/// Success body: `{"ok":true}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionResponse {
    pub ok: bool,
}

impl ActionResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Error body: `{"message":"..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Missing or unrecognized `intent` field
    #[error("Invalid intent")]
    InvalidIntent,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ActionError {
    /// HTTP-equivalent status
    pub fn status(&self) -> u16 {
        match self {
            ActionError::InvalidIntent => 400,
            ActionError::Store(_) => 500,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
        }
    }
}

/// Apply the intent carried by `form` to the stored list
///
/// The list is loaded before the intent is checked, so corrupt storage
/// fails first. An invalid intent never writes.
pub fn action<S, G>(
    repo: &TodoRepository<S, G>,
    form: &FormSubmission,
) -> Result<ActionResponse, ActionError>
where
    S: KeyValueStorage,
    G: IdGenerator,
{
    let mut todos = repo.load_todos()?;

    let raw_intent = form.get(INTENT_FIELD);
    let intent: Intent = raw_intent
        .unwrap_or_default()
        .parse()
        .inspect_err(|_| log::warn!("rejected submission with intent {raw_intent:?}"))?;

    match intent {
        Intent::AddTodo => {
            let value = form.get(TODO_FIELD).unwrap_or_default();
            let todo = Todo::new(repo.next_id(), value);
            log::info!("{intent}: {}", todo.id);
            push_todo(&mut todos, todo);
        }
        Intent::ToggleTodo => {
            let id = form.get(ID_FIELD);
            let flipped = toggle_todo(&mut todos, id);
            log::info!("{intent}: {id:?} ({flipped} matched)");
        }
        Intent::DeleteTodo => {
            let id = form.get(ID_FIELD);
            let removed = remove_todo(&mut todos, id);
            log::info!("{intent}: {id:?} ({removed} removed)");
        }
    }

    repo.save_todos(&todos)?;
    Ok(ActionResponse::ok())
}
