//! Visually Hidden Component
//!
//! Text for assistive technology only.

use leptos::prelude::*;

#[component]
pub fn VisuallyHidden(children: Children) -> impl IntoView {
    view! { <span class="visually-hidden">{children()}</span> }
}
