//! New Todo Form Component
//!
//! Form for adding todos. Cleared once an add has gone through.

use leptos::prelude::*;
use todo_store::{Intent, NavigationState, INTENT_FIELD, TODO_FIELD};

use crate::commands;
use crate::context::use_app_context;
use crate::form_data::read_submission;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some((form_el, form)) = read_submission(&ev) else { return };
        if commands::submit(&store, &ctx, form) {
            form_el.reset();
        }
    };

    let submitting = move || store.navigation().get() != NavigationState::Idle;

    view! {
        <form method="post" on:submit=on_submit>
            <label for="new-list-form-input">"New item:"</label>
            <div class="row">
                <input id="new-list-form-input" type="text" name=TODO_FIELD required=true />
                <button
                    type="submit"
                    name=INTENT_FIELD
                    value=Intent::AddTodo.as_str()
                    disabled=submitting
                >
                    "Add"
                </button>
            </div>
        </form>
    }
}
