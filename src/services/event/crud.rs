use super::EventStore;
use crate::error::StoreError;
use crate::models::event::{CalendarEvent, EventId, EventPatch};
use crate::utils::date::compact_date;
use chrono::NaiveDate;

impl EventStore {
    /// Append a new event.
    pub fn add(&mut self, event: CalendarEvent) -> Result<(), StoreError> {
        if self.contains(&event.id) {
            return Err(StoreError::DuplicateId(event.id));
        }

        log::debug!("Adding event {} ({} on {})", event.id, event.name, event.date_label());
        self.events.push(event);
        Ok(())
    }

    /// Merge a full or partial patch onto an existing event.
    pub fn update(&mut self, id: &EventId, patch: &EventPatch) -> Result<(), StoreError> {
        let event = self
            .events
            .iter_mut()
            .find(|event| &event.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        patch.apply(event);
        log::debug!("Updated event {}", id);
        Ok(())
    }

    /// Remove an event by id. Absent ids are ignored.
    pub fn delete(&mut self, id: &EventId) -> Option<CalendarEvent> {
        let Some(index) = self.events.iter().position(|event| &event.id == id) else {
            log::debug!("Delete of unknown event {} ignored", id);
            return None;
        };

        Some(self.events.remove(index))
    }

    /// Generate `event-<ddmmyyyy>-<n>`, skipping ids already in use.
    pub fn next_id(&mut self, date: NaiveDate) -> EventId {
        let prefix = compact_date(date);
        loop {
            self.next_sequence += 1;
            let id = EventId::new(format!("event-{}-{}", prefix, self.next_sequence));
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
