//! Storefront Frontend App
//!
//! Root component: owns the reload flag and hosts the item grid.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::{Header, ItemList};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log!("[APP] Backend at {}", config.server());

    // Starts true so the list loads on mount; cleared once a load settles
    // either way, so refresh can raise it again
    let (reload, set_reload) = signal(true);
    let ctx = AppContext::new(config.clone(), (reload, set_reload));
    provide_context(ctx);

    view! {
        <div class="App">
            <Header />
            <main class="main-content">
                <ItemList
                    config=config
                    reload=reload
                    on_load_completed=Callback::new(move |_| ctx.finish_reload())
                    on_load_failed=Callback::new(move |_| ctx.finish_reload())
                />
            </main>
        </div>
    }
}
