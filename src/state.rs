//! Shared application state.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::scheduler::Scheduler;

/// Shared handle to the scheduler, constructed once at startup and passed
/// explicitly to front-end handlers.
///
/// The write lock spans the whole conflict-check-then-append sequence in
/// [`Scheduler::add`], so concurrent callers cannot interleave between the
/// check and the append.
#[derive(Clone, Default)]
pub struct AppState {
    scheduler: Arc<RwLock<Scheduler>>,
}

impl AppState {
    /// Create state holding an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared read access for queries.
    pub fn scheduler(&self) -> RwLockReadGuard<'_, Scheduler> {
        self.scheduler.read()
    }

    /// Exclusive access for `add` and `remove`.
    pub fn scheduler_mut(&self) -> RwLockWriteGuard<'_, Scheduler> {
        self.scheduler.write()
    }
}
