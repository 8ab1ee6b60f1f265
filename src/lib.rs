//! # Roadshow Scheduler
//!
//! In-memory scheduling core for IPO roadshow presentations.
//!
//! A roadshow presentation is one scheduled company pitch: company name,
//! location, calendar date and a start/end time range. The [`Scheduler`]
//! owns the accepted bookings and rejects any addition whose time range
//! overlaps an existing booking at the same location on the same date.
//!
//! ## Features
//!
//! - **Validation**: presentations are constructor-validated (the end time
//!   must not precede the start time)
//! - **Conflict detection**: half-open interval overlap per (location, date)
//! - **Queries**: date/time-sorted listing and a case-insensitive location
//!   filter
//! - **Availability**: pure `would_conflict` probe with no transient mutation
//! - **Console UI**: menu-driven front-end (feature `console-ui`, on by
//!   default)
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: `Presentation` and `TimeSlot` value types
//! - [`scheduler`]: the conflict-checking core
//! - [`state`]: shared application state, constructed once and passed to
//!   front-end handlers
//! - [`console`]: interactive front-end over stdin/stdout
//!
//! All data is memory-resident and lost on exit; there is no persistence,
//! network surface, or time-zone handling.

pub mod error;
pub mod models;
pub mod scheduler;
pub mod state;

#[cfg(feature = "console-ui")]
pub mod console;

pub use error::{ConflictError, ValidationError};
pub use models::{Presentation, TimeSlot};
pub use scheduler::Scheduler;
pub use state::AppState;
