//! Conflict-checking scheduler core.
//!
//! The [`Scheduler`] owns the list of accepted presentations and enforces
//! the no-overlap invariant: no two accepted presentations at the same
//! location on the same date may overlap in time under half-open interval
//! semantics. The invariant is checked on every insertion; a rejected add
//! never mutates the list.

use tracing::debug;

use crate::error::ConflictError;
use crate::models::Presentation;

/// Authoritative set of accepted presentations.
///
/// Single-threaded by design: the conflict-check-then-append sequence in
/// [`add`](Self::add) is not atomic on its own. Shared access goes through
/// [`AppState`](crate::state::AppState), whose write lock spans the whole
/// sequence.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    presentations: Vec<Presentation>,
}

impl Scheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted presentations.
    pub fn len(&self) -> usize {
        self.presentations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presentations.is_empty()
    }

    /// Accept a presentation, or reject it when it overlaps an accepted
    /// booking at the same location on the same date.
    ///
    /// The location comparison here is case-sensitive, unlike
    /// [`list_by_location`](Self::list_by_location). Accepted entries are
    /// appended unconditionally: there is no capacity limit, and a
    /// non-overlapping duplicate of an existing record becomes a second
    /// record.
    pub fn add(&mut self, presentation: Presentation) -> Result<(), ConflictError> {
        if let Some(existing) = self.find_conflict(&presentation) {
            debug!(
                company = presentation.company_name(),
                conflict = %existing,
                "rejected overlapping presentation"
            );
            return Err(ConflictError {
                existing: existing.clone(),
            });
        }

        debug!(
            company = presentation.company_name(),
            location = presentation.location(),
            "accepted presentation"
        );
        self.presentations.push(presentation);
        Ok(())
    }

    /// Remove every entry structurally equal to `presentation` (all five
    /// fields, location case-sensitive).
    ///
    /// Silent no-op when nothing matches; when several stored entries are
    /// structurally identical, all of them are removed.
    pub fn remove(&mut self, presentation: &Presentation) {
        let before = self.presentations.len();
        self.presentations.retain(|p| p != presentation);
        let removed = before - self.presentations.len();
        if removed > 0 {
            debug!(
                company = presentation.company_name(),
                removed, "removed presentation entries"
            );
        }
    }

    /// All accepted presentations as a freshly sorted copy, ordered by
    /// `(date, start_time)` ascending (stable over insertion order).
    /// Internal order is not affected.
    pub fn list_all(&self) -> Vec<Presentation> {
        let mut all = self.presentations.clone();
        all.sort_by_key(|p| (p.date(), p.start_time()));
        all
    }

    /// Presentations at `location`, compared case-insensitively, in
    /// insertion order. Empty when nothing matches.
    ///
    /// The relaxed comparison is deliberately asymmetric with the
    /// case-sensitive match used by conflict detection and removal: a
    /// filter for "nyc" finds bookings stored as "NYC", but a new "nyc"
    /// booking does not conflict with them.
    pub fn list_by_location(&self, location: &str) -> Vec<Presentation> {
        let wanted = location.to_lowercase();
        self.presentations
            .iter()
            .filter(|p| p.location().to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    /// Whether [`add`](Self::add) would reject `candidate`. Pure: never
    /// mutates, so availability checks leave no transient booking behind.
    pub fn would_conflict(&self, candidate: &Presentation) -> bool {
        self.find_conflict(candidate).is_some()
    }

    /// The first accepted presentation that blocks `candidate`, if any:
    /// same location (case-sensitive), same date, overlapping time slot.
    pub fn find_conflict(&self, candidate: &Presentation) -> Option<&Presentation> {
        self.presentations.iter().find(|existing| {
            existing.location() == candidate.location()
                && existing.date() == candidate.date()
                && existing.slot().overlaps(&candidate.slot())
        })
    }
}
