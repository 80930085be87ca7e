//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Ordered list of todos in stored order
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ol class="todo-list">
            <For
                each=move || store.todos().get()
                // Completion is part of the key so toggled rows re-render
                key=|todo| (todo.id.clone(), todo.is_completed())
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ol>
    }
}
