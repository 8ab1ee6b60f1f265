//! Value types for the scheduling domain.

pub mod presentation;
pub mod time_slot;

pub use presentation::*;
pub use time_slot::*;
