//! Item List Component
//!
//! Loads items from the backend whenever `reload` turns true and renders
//! them as a grid of cards.

use std::future::Future;

use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{build_cards, ItemCard};
use crate::config::AppConfig;
use crate::error::FetchError;
use crate::loader::{should_load, LoadOutcome, RequestTracker};
use crate::models::Item;
use crate::store::{ItemListState, ItemListStateStoreFields, LoadPhase};

/// Drives loads for one mounted list: decides when to fetch, applies the
/// result to the store and runs the caller's callbacks.
pub struct ListLoader<F> {
    state: Store<ItemListState>,
    tracker: RequestTracker,
    fetch: F,
    on_load_completed: Option<Callback<()>>,
    on_load_failed: Option<Callback<FetchError>>,
}

impl<F, Fut> ListLoader<F>
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<Item>, FetchError>> + 'static,
{
    pub fn new(
        state: Store<ItemListState>,
        tracker: RequestTracker,
        fetch: F,
        on_load_completed: Option<Callback<()>>,
        on_load_failed: Option<Callback<FetchError>>,
    ) -> Self {
        Self {
            state,
            tracker,
            fetch,
            on_load_completed,
            on_load_failed,
        }
    }

    /// One run of the reload effect. `reload` of `None` means the prop was
    /// not given and counts as true.
    ///
    /// Returns the value to remember for the next run, and the load to
    /// spawn when this run starts one.
    pub fn run(
        &self,
        previous: Option<bool>,
        reload: Option<bool>,
    ) -> (bool, Option<impl Future<Output = ()> + 'static>) {
        let reload = reload.unwrap_or(true);
        if !should_load(previous, reload) {
            return (reload, None);
        }

        let request = self.tracker.track((self.fetch)());
        self.state.update(|s| s.start());

        let state = self.state;
        let on_load_completed = self.on_load_completed;
        let on_load_failed = self.on_load_failed;
        let load = async move {
            let outcome = request.await;
            let failure = match &outcome {
                LoadOutcome::Loaded(items) => {
                    log!("[ItemList] GET success: {} items", items.len());
                    None
                }
                LoadOutcome::Failed(e) => {
                    error!("[ItemList] GET error: {}", e);
                    Some(e.clone())
                }
                LoadOutcome::Stale => {
                    warn!("[ItemList] Discarding stale response");
                    return;
                }
            };

            let completed = state.try_update(|s| s.settle(outcome)).unwrap_or(false);
            if completed {
                if let Some(callback) = on_load_completed {
                    callback.run(());
                }
            }
            if let (Some(e), Some(callback)) = (failure, on_load_failed) {
                callback.run(e);
            }
        };

        (reload, Some(load))
    }
}

/// Item grid
///
/// # Arguments
/// * `config` - Backend and asset locations
/// * `reload` - Fetch when this is true on mount or turns true later (default true)
/// * `on_load_completed` - Runs after each successful fetch, never on failure
/// * `on_load_failed` - Runs with the error when a fetch fails
#[component]
pub fn ItemList(
    config: AppConfig,
    #[prop(into, optional)] reload: MaybeProp<bool>,
    #[prop(optional)] on_load_completed: Option<Callback<()>>,
    #[prop(optional)] on_load_failed: Option<Callback<FetchError>>,
) -> impl IntoView {
    let state = Store::new(ItemListState::default());
    let tracker = RequestTracker::new();

    // Responses landing after unmount are dropped
    on_cleanup({
        let tracker = tracker.clone();
        move || tracker.close()
    });

    let fetch_config = config.clone();
    let loader = ListLoader::new(
        state,
        tracker,
        move || {
            let config = fetch_config.clone();
            async move { api::list_items(&config).await }
        },
        on_load_completed,
        on_load_failed,
    );

    Effect::new(move |previous: Option<bool>| {
        let (current, load) = loader.run(previous, reload.get());
        if let Some(load) = load {
            spawn_local(load);
        }
        current
    });

    let is_loading = move || state.phase().get() == LoadPhase::Loading;
    let cards = move || build_cards(&config, &state.items().get());

    view! {
        <div
            id="item-grid"
            class:loading=is_loading
            aria-busy=move || if is_loading() { "true" } else { "false" }
        >
            <ul class="item-list">
                <For
                    each=cards
                    key=|card| card.clone()
                    children=move |card| view! { <ItemCard card=card /> }
                />
            </ul>
        </div>
    }
}
