//! Error types for the scheduling core.

use chrono::NaiveTime;
use thiserror::Error;

use crate::models::Presentation;

/// Errors raised when constructing a presentation or time slot.
///
/// Always recoverable: the caller re-prompts for corrected input. Never
/// raised by any scheduler operation after construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The end of a time slot precedes its start.
    #[error("End time {} cannot be before start time {}", .end.format("%H:%M"), .start.format("%H:%M"))]
    EndBeforeStart { start: NaiveTime, end: NaiveTime },
}

/// Raised by [`Scheduler::add`](crate::Scheduler::add) when the candidate
/// overlaps an accepted booking at the same location and date.
///
/// Carries the conflicting entry so callers can report which booking blocks
/// the slot; the rendered message embeds that entry's formatted line.
/// Always recoverable: a rejected add leaves the schedule untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Scheduling conflict with existing booking: {existing}")]
pub struct ConflictError {
    /// The already-accepted presentation that blocks the candidate.
    pub existing: Presentation,
}
