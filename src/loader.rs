//! Request Tracking
//!
//! Ties each fetch to the trigger that started it, so a response that
//! lands after a newer trigger (or after unmount) is dropped instead of
//! overwriting state.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::FetchError;

/// Identity of one started request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct TrackerState {
    generation: AtomicU64,
    closed: AtomicBool,
}

/// Hands out tickets; only the latest one is current until closed
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    inner: Arc<TrackerState>,
}

/// Result of a tracked request
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Failed(FetchError),
    /// Superseded by a newer request or the owner went away
    Stale,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any outstanding one
    pub fn begin(&self) -> Ticket {
        Ticket(self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.inner.closed.load(Ordering::SeqCst)
            && self.inner.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Invalidate every ticket, including future ones
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
    }

    /// Take a ticket now and resolve `fetch` against it.
    ///
    /// The ticket is taken when this is called, not when the returned
    /// future is first polled.
    pub fn track<T, F>(&self, fetch: F) -> impl Future<Output = LoadOutcome<T>>
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        let ticket = self.begin();
        let tracker = self.clone();
        async move {
            let result = fetch.await;
            if !tracker.is_current(ticket) {
                return LoadOutcome::Stale;
            }
            match result {
                Ok(value) => LoadOutcome::Loaded(value),
                Err(e) => LoadOutcome::Failed(e),
            }
        }
    }
}

/// Whether an effect run should fetch: `reload` is true and was not
/// already true on the previous run
pub fn should_load(previous: Option<bool>, reload: bool) -> bool {
    reload && previous != Some(true)
}
