//! Error Banner Component
//!
//! Shows the last loader/action failure with its status.

use leptos::prelude::*;

use crate::store::{store_set_error, use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    move || {
        store.error().get().map(|e| {
            view! {
                <div class="error-banner" role="alert">
                    <strong>{e.status}</strong>
                    " "
                    {e.message}
                    <button
                        type="button"
                        class="dismiss-btn"
                        on:click=move |_| store_set_error(&store, None)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
