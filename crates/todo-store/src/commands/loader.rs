//! Loader
//!
//! Read path feeding the view. Never writes.

use serde::Serialize;

use crate::domain::{StoreResult, Todo};
use crate::repository::{IdGenerator, KeyValueStorage, TodoRepository};

/// Loader payload: `{"todos":[...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoaderData {
    pub todos: Vec<Todo>,
}

pub fn loader<S, G>(repo: &TodoRepository<S, G>) -> StoreResult<LoaderData>
where
    S: KeyValueStorage,
    G: IdGenerator,
{
    Ok(LoaderData {
        todos: repo.load_todos()?,
    })
}
