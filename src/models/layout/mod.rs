// Layout module
// Ephemeral projections handed to the presentation layer. Never stored.

use chrono::NaiveDate;
use serde::Serialize;

use super::event::{CalendarEvent, EventId};
use crate::utils::time::ClockTime;

/// An event reduced to what one day column needs for layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEvent {
    pub id: EventId,
    pub title: String,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl DisplayEvent {
    pub fn new(id: EventId, title: impl Into<String>, start: ClockTime, end: ClockTime) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end,
        }
    }

    pub fn start_minutes(&self) -> u16 {
        self.start.minutes()
    }

    pub fn end_minutes(&self) -> u16 {
        self.end.minutes()
    }

    pub fn duration_minutes(&self) -> i32 {
        self.end_minutes() as i32 - self.start_minutes() as i32
    }
}

impl From<&CalendarEvent> for DisplayEvent {
    fn from(event: &CalendarEvent) -> Self {
        Self::new(
            event.id.clone(),
            event.name.clone(),
            event.start_time,
            event.end_time,
        )
    }
}

/// Events sharing one vertical stacking slot; no two of them overlap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lane {
    events: Vec<DisplayEvent>,
}

impl Lane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DisplayEvent> {
        self.events.iter()
    }

    pub(crate) fn push(&mut self, event: DisplayEvent) {
        self.events.push(event);
    }
}

impl<'a> IntoIterator for &'a Lane {
    type Item = &'a DisplayEvent;
    type IntoIter = std::slice::Iter<'a, DisplayEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// An event block with pixel geometry inside its day row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEvent {
    pub id: EventId,
    pub title: String,
    pub start: ClockTime,
    pub end: ClockTime,
    pub lane: usize,
    pub left: f32,
    pub width: f32,
    pub top: f32,
    pub height: f32,
}

/// One day of the visible window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRow {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub day_of_month: u32,
    /// Lane-major: `lanes[i]` holds the blocks drawn in lane `i`
    pub lanes: Vec<Vec<PositionedEvent>>,
    pub height: f32,
}

impl DayRow {
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &PositionedEvent> {
        self.lanes.iter().flatten()
    }
}

/// Everything the presentation layer needs to paint one week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub title: String,
    pub hour_labels: Vec<String>,
    pub days: Vec<DayRow>,
    /// Earliest start hour among the window's events, 0 when empty
    pub scroll_hour: u16,
    pub scroll_offset: f32,
    pub grid_width: f32,
}

impl WeekLayout {
    pub fn event_count(&self) -> usize {
        self.days.iter().map(|day| day.events().count()).sum()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRow> {
        self.days.iter().find(|day| day.date == date)
    }
}
