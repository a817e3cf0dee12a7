// Event module
// Calendar event record, identifiers, partial updates and seed records

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DateError;
use crate::utils::date::{format_event_date, parse_event_date};
use crate::utils::time::ClockTime;

/// Opaque event identifier, unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One dated occurrence in the calendar.
///
/// The date is held once, as a calendar date; year, month and the
/// `DD/MM/YYYY` label are derived from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl CalendarEvent {
    /// Create an event without validation. The form boundary validates.
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            start_time,
            end_time,
        }
    }

    /// Create a builder for constructing validated events
    ///
    /// # Examples
    /// ```
    /// use week_calendar::models::event::CalendarEvent;
    ///
    /// let event = CalendarEvent::builder()
    ///     .id("event-0")
    ///     .name("Team Standup")
    ///     .date_text("19/6/2025")
    ///     .times("9:00 AM", "9:30 AM")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(event.month(), 6);
    /// ```
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn date_label(&self) -> String {
        format_event_date(self.date)
    }

    /// Length in minutes; negative if the record was stored out of order.
    pub fn duration_minutes(&self) -> i32 {
        self.end_time.minutes() as i32 - self.start_time.minutes() as i32
    }

    /// Validate name and time ordering
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

/// Partial replacement of an event's fields. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<ClockTime>,
    pub end_time: Option<ClockTime>,
}

impl EventPatch {
    /// Patch that replaces every mutable field.
    pub fn replace_all(
        name: impl Into<String>,
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Self {
        Self {
            name: Some(name.into()),
            date: Some(date),
            start_time: Some(start_time),
            end_time: Some(end_time),
        }
    }

    pub fn apply(&self, event: &mut CalendarEvent) {
        if let Some(ref name) = self.name {
            event.name = name.clone();
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = end_time;
        }
    }
}

/// Builder for creating events in tests and fixtures
pub struct EventBuilder {
    id: Option<EventId>,
    name: Option<String>,
    date: Option<Result<NaiveDate, DateError>>,
    start_time: Option<String>,
    end_time: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            date: None,
            start_time: None,
            end_time: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(EventId::new(id));
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(Ok(date));
        self
    }

    /// Set the date from `D/M/YYYY` text
    pub fn date_text(mut self, text: &str) -> Self {
        self.date = Some(parse_event_date(text));
        self
    }

    /// Set start and end from 12-hour clock text
    pub fn times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    pub fn build(self) -> Result<CalendarEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let name = self.name.ok_or("Event name is required")?;
        let date = self
            .date
            .ok_or("Event date is required")?
            .map_err(|e| e.to_string())?;
        let start_time = self
            .start_time
            .ok_or("Event start time is required")?
            .parse::<ClockTime>()
            .map_err(|e| e.to_string())?;
        let end_time = self
            .end_time
            .ok_or("Event end time is required")?
            .parse::<ClockTime>()
            .map_err(|e| e.to_string())?;

        let event = CalendarEvent::new(id, name, date, start_time, end_time);
        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial-data record in its original shape, without an id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedEvent {
    pub year: i32,
    pub month: u32,
    pub event: SeedDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDetails {
    pub event_name: String,
    pub date: String,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl SeedEvent {
    /// Convert into a stored event. The date text wins over `year`/`month`.
    pub fn into_event(self, id: EventId) -> Result<CalendarEvent, DateError> {
        let date = parse_event_date(&self.event.date)?;

        if date.year() != self.year || date.month() != self.month {
            log::warn!(
                "Seed record {} has year/month {}/{} but date {}; using the date",
                id,
                self.year,
                self.month,
                self.event.date
            );
        }

        Ok(CalendarEvent::new(
            id,
            self.event.event_name,
            date,
            self.event.start_time,
            self.event.end_time,
        ))
    }
}
