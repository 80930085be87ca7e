//! Todo Row Component
//!
//! One list entry: a form with a toggle button and a delete button.

use leptos::prelude::*;
use todo_store::{Intent, Todo, ID_FIELD, INTENT_FIELD};

use crate::commands;
use crate::components::VisuallyHidden;
use crate::context::use_app_context;
use crate::form_data::read_submission;
use crate::store::use_app_store;

/// A single todo row
///
/// Both buttons submit the same form; the pressed button supplies the intent.
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let completed = todo.is_completed();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some((_, form)) = read_submission(&ev) {
            commands::submit(&store, &ctx, form);
        }
    };

    view! {
        <li>
            <form method="post" on:submit=on_submit>
                <input type="hidden" name=ID_FIELD value=todo.id.clone() />
                <button
                    type="submit"
                    name=INTENT_FIELD
                    value=Intent::ToggleTodo.as_str()
                    class={if completed { "toggle completed" } else { "toggle" }}
                    aria-label="toggle item"
                >
                    {todo.value.clone()}
                    {completed.then(|| view! { <VisuallyHidden>" (Completed)"</VisuallyHidden> })}
                </button>
                <button
                    type="submit"
                    name=INTENT_FIELD
                    value=Intent::DeleteTodo.as_str()
                    class="delete-btn"
                >
                    <span aria-hidden="true">"×"</span>
                    <VisuallyHidden>"Delete Item"</VisuallyHidden>
                </button>
            </form>
        </li>
    }
}
