//! The presentation value entity.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::TimeSlot;

/// One scheduled roadshow presentation: a company pitch at a location on a
/// date, within a time slot.
///
/// Immutable once constructed; the time range is validated by [`TimeSlot`].
/// Equality is structural over all five fields, with the location compared
/// case-sensitively. Removal relies on this equality, while the location
/// filter query deliberately does not (see
/// [`Scheduler::list_by_location`](crate::Scheduler::list_by_location)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    company_name: String,
    location: String,
    date: NaiveDate,
    slot: TimeSlot,
}

impl Presentation {
    /// Create a validated presentation. Fails when `end` precedes `start`.
    pub fn new(
        company_name: impl Into<String>,
        location: impl Into<String>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, ValidationError> {
        let slot = TimeSlot::new(start, end)?;
        Ok(Self {
            company_name: company_name.into(),
            location: location.into(),
            date,
            slot,
        })
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn slot(&self) -> TimeSlot {
        self.slot
    }

    pub fn start_time(&self) -> NaiveTime {
        self.slot.start()
    }

    pub fn end_time(&self) -> NaiveTime {
        self.slot.end()
    }
}

/// Fixed-width table rendering: company padded to 15 columns, location to
/// 10, date to 10 (ISO), then the time range.
impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15} | {:<10} | {:<10} | {}",
            self.company_name,
            self.location,
            self.date.to_string(),
            self.slot
        )
    }
}
