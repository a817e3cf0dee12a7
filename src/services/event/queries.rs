use super::EventStore;
use crate::models::event::{CalendarEvent, EventId};
use chrono::NaiveDate;

impl EventStore {
    /// Every event in insertion order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.events.iter().any(|event| &event.id == id)
    }

    pub fn get(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| &event.id == id)
    }

    /// First event on `date` whose name matches exactly.
    pub fn find_by_date_and_name(&self, date: NaiveDate, name: &str) -> Option<&CalendarEvent> {
        self.events
            .iter()
            .find(|event| event.date == date && event.name == name)
    }

    /// Events dated within `[start, end]`, compared by day, in insertion order.
    pub fn events_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|event| event.date >= start && event.date <= end)
            .collect()
    }
}
