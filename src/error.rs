//! Error types for the calendar core.

use thiserror::Error;

use crate::models::event::EventId;

/// Failure to read a 12-hour clock string such as `"9:00 AM"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Invalid time format: {0:?} (expected H:MM AM|PM)")]
    InvalidFormat(String),
}

/// Failure to read a day/month/year date string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date: {0:?} (expected D/M/YYYY)")]
    InvalidDate(String),

    #[error("No complete week around {0} in the supported calendar range")]
    OutOfRange(chrono::NaiveDate),
}

/// Event store contract violations. These point at a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Event with id {0} already exists")]
    DuplicateId(EventId),

    #[error("Event with id {0} not found")]
    NotFound(EventId),
}

/// Errors raised while expanding a weekly recurrence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecurrenceError {
    #[error("End year {end_year} is outside the allowed range for a series starting in {start_year}")]
    InvalidEndYear { end_year: i32, start_year: i32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Form-level validation failures, shown to the user while the form stays open.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event name is required")]
    EmptyName,

    #[error(transparent)]
    InvalidDate(#[from] DateError),

    #[error(transparent)]
    InvalidTimeFormat(#[from] TimeError),

    #[error("Start time must be earlier than end time.")]
    InvalidTimeRange { start: String, end: String },

    #[error("Events in {year} cannot repeat (latest end year is {max_end_year})")]
    EndYearOutOfRange { year: i32, max_end_year: i32 },
}

/// Umbrella error for callers that drive several components at once.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error("Date error: {0}")]
    Date(#[from] DateError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Recurrence error: {0}")]
    Recurrence(#[from] RecurrenceError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),
}

pub type Result<T, E = CalendarError> = std::result::Result<T, E>;
