//! Page Header Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Title bar with a refresh button that re-triggers the item list load.
///
/// The button is disabled while a load is outstanding.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let refresh_title = ctx.config.with_value(|c| format!("Reload items from {}", c.items_url()));

    view! {
        <header class="Title">
            <p>
                <b>"Simple Mercari"</b>
            </p>
            <button
                class="refresh-btn"
                title=refresh_title
                disabled=move || ctx.reload.get()
                on:click=move |_| ctx.request_reload()
            >
                "⟳"
            </button>
        </header>
    }
}
