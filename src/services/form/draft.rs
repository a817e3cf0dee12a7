use chrono::NaiveDate;

use crate::error::TimeError;
use crate::models::event::{CalendarEvent, EventId};
use crate::utils::date::format_event_date;
use crate::utils::time::{ClockTime, Meridiem};

/// Minutes offered by the time picker
pub const MINUTE_OPTIONS: [u8; 4] = [0, 15, 30, 45];

/// One discrete choice from the hour/minute/meridiem picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSelection {
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

impl TimeSelection {
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Self {
        Self {
            hour,
            minute,
            meridiem,
        }
    }

    /// Resolve the selection. Minutes outside the picker's options are refused.
    pub fn to_clock_time(self) -> Result<ClockTime, TimeError> {
        if !MINUTE_OPTIONS.contains(&self.minute) {
            return Err(TimeError::InvalidFormat(format!(
                "{}:{:02} {}",
                self.hour, self.minute, self.meridiem
            )));
        }
        ClockTime::from_parts(self.hour, self.minute, self.meridiem)
    }
}

/// Text the user is editing. Kept raw until submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFields {
    pub name: String,
    pub date_text: String,
    pub start_time: String,
    pub end_time: String,
}

impl DraftFields {
    pub fn new(date: NaiveDate, start: ClockTime, end: ClockTime) -> Self {
        Self {
            name: String::new(),
            date_text: format_event_date(date),
            start_time: start.padded(),
            end_time: end.padded(),
        }
    }
}

impl From<&CalendarEvent> for DraftFields {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            name: event.name.clone(),
            date_text: format_event_date(event.date),
            start_time: event.start_time.padded(),
            end_time: event.end_time.padded(),
        }
    }
}

/// A form draft is either a new event or an edit of a stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDraft {
    Create(DraftFields),
    Edit { id: EventId, fields: DraftFields },
}

impl EventDraft {
    pub fn fields(&self) -> &DraftFields {
        match self {
            Self::Create(fields) | Self::Edit { fields, .. } => fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut DraftFields {
        match self {
            Self::Create(fields) | Self::Edit { fields, .. } => fields,
        }
    }

    pub fn id(&self) -> Option<&EventId> {
        match self {
            Self::Create(_) => None,
            Self::Edit { id, .. } => Some(id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }
}

/// "Repeat weekly until" toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatWeekly {
    pub enabled: bool,
    pub end_year: i32,
}
