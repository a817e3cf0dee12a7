// Event Template model
// The user-entered description a weekly series is generated from

use chrono::{Datelike, NaiveDate, Weekday};

use super::event::{CalendarEvent, EventId, EventPatch};
use crate::utils::time::ClockTime;

/// Template for one or more occurrences sharing name and times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTemplate {
    pub name: String,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl EventTemplate {
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            start_time,
            end_time,
        }
    }

    /// Day of week every occurrence falls on
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Materialize the occurrence on `date` under a fresh id.
    pub fn occurrence(&self, id: EventId, date: NaiveDate) -> CalendarEvent {
        CalendarEvent::new(id, self.name.clone(), date, self.start_time, self.end_time)
    }

    /// Patch that moves an existing occurrence onto this template's fields.
    pub fn patch_for(&self, date: NaiveDate) -> EventPatch {
        EventPatch::replace_all(self.name.clone(), date, self.start_time, self.end_time)
    }

    /// Validate the template
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Event name cannot be empty".to_string());
        }

        if self.end_time <= self.start_time {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }
}
