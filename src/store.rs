//! Item List View State
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use reactive_stores::Store;

use crate::loader::LoadOutcome;
use crate::models::Item;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
}

/// State owned by one mounted `ItemList`
#[derive(Clone, Debug, Default, Store)]
pub struct ItemListState {
    /// Items in server response order
    pub items: Vec<Item>,
    pub phase: LoadPhase,
}

impl ItemListState {
    pub fn start(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Apply a finished request. Returns true when the load succeeded and
    /// the completion callback should run.
    ///
    /// Failures keep the previous items. Stale outcomes change nothing,
    /// the newer request owns the phase.
    pub fn settle(&mut self, outcome: LoadOutcome<Vec<Item>>) -> bool {
        match outcome {
            LoadOutcome::Loaded(items) => {
                self.items = items;
                self.phase = LoadPhase::Idle;
                true
            }
            LoadOutcome::Failed(_) => {
                self.phase = LoadPhase::Idle;
                false
            }
            LoadOutcome::Stale => false,
        }
    }
}
