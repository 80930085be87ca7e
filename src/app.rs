//! Local Todos App
//!
//! Root component: provides state, runs the loader, lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ErrorBanner, NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    let ctx = AppContext::new(signal(0u32));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Loader: initial render, then after every action
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[APP] Loading todos, trigger={}", trigger);
        commands::load_todos(&store);
    });

    view! {
        <div class="wrapper">
            <ErrorBanner />
            <div class="list-wrapper">
                <TodoList />
            </div>
            <div class="create-new-todo-wrapper">
                <NewTodoForm />
            </div>
        </div>
    }
}
