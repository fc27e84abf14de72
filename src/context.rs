//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend and asset locations
    pub config: StoredValue<AppConfig>,
    /// Whether the item list should (re)load - read
    pub reload: ReadSignal<bool>,
    /// Whether the item list should (re)load - write
    set_reload: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(config: AppConfig, reload: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            config: StoredValue::new(config),
            reload: reload.0,
            set_reload: reload.1,
        }
    }

    /// Ask the item list to fetch again
    pub fn request_reload(&self) {
        self.set_reload.set(true);
    }

    /// Called once the item list load has settled, successfully or not
    pub fn finish_reload(&self) {
        self.set_reload.set(false);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
