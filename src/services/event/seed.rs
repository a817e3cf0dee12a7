//! Initial data for the store.
//!
//! The bundled data set mirrors the widget's demo events across May, June and
//! July 2025. Records carry no ids; seeding assigns `event-<index>`.

use super::EventStore;
use crate::error::CalendarError;
use crate::models::event::{EventId, SeedEvent};

const MOCK_EVENTS_JSON: &str = include_str!("mock_events.json");

/// Parse the bundled demo records.
pub fn mock_events() -> Result<Vec<SeedEvent>, serde_json::Error> {
    parse_seed_events(MOCK_EVENTS_JSON)
}

/// Parse seed records from any JSON document in the same shape.
pub fn parse_seed_events(json: &str) -> Result<Vec<SeedEvent>, serde_json::Error> {
    serde_json::from_str(json)
}

impl EventStore {
    /// Build a store from an ordered sequence of seed records.
    pub fn seeded(records: Vec<SeedEvent>) -> Result<Self, CalendarError> {
        let mut store = Self::new();
        for (index, record) in records.into_iter().enumerate() {
            let event = record.into_event(EventId::new(format!("event-{}", index)))?;
            store.add(event)?;
        }

        log::info!("Seeded event store with {} events", store.len());
        Ok(store)
    }

    /// Store preloaded with the bundled demo records.
    pub fn with_mock_data() -> Result<Self, CalendarError> {
        Self::seeded(mock_events()?)
    }
}
