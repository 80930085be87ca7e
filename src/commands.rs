//! Route Commands
//!
//! Frontend bindings to the todo-store loader and action, backed by
//! `localStorage`. Everything runs synchronously inside the event handler.

use todo_store::{action, loader, should_clear_add_form, FormSubmission, NavigationState, TodoRepository};

use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::{store_set_error, store_set_navigation, store_set_todos, AppStore, PageError};

fn repository() -> TodoRepository<LocalStorage> {
    TodoRepository::new(LocalStorage)
}

/// Run the loader and publish its result to the store
pub fn load_todos(store: &AppStore) {
    match loader(&repository()) {
        Ok(data) => {
            log::debug!("[LOADER] {} todos", data.todos.len());
            store_set_todos(store, data.todos);
        }
        Err(e) => {
            log::error!("[LOADER] {}", e);
            store_set_error(store, Some(PageError::from(&e)));
        }
    }
}

/// Handle one form submission, then trigger a reload
///
/// Returns true when the submission was an add that succeeded, i.e. the
/// add form should be cleared.
pub fn submit(store: &AppStore, ctx: &AppContext, form: FormSubmission) -> bool {
    store_set_navigation(store, NavigationState::submitting(&form));

    let outcome = action(&repository(), &form);
    match &outcome {
        Ok(_) => store_set_error(store, None),
        Err(e) => {
            log::error!("[ACTION] {} ({})", e, e.status());
            store_set_error(store, Some(PageError::from(e)));
        }
    }

    store_set_navigation(store, NavigationState::Idle);
    ctx.reload();

    should_clear_add_form(&form, &outcome)
}
