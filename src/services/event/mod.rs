//! Calendar event store entry point.
//! Provides the in-memory store, its repository seam, seeding and weekly
//! recurrence expansion, organized across focused submodules.

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::models::event::{CalendarEvent, EventId, EventPatch};

pub mod crud;
pub mod queries;
pub mod recurrence;
pub mod seed;

/// Operations the form controller and recurrence expander need from a store.
///
/// Implementations observe a single consistent snapshot: a read issued after
/// a completed write sees that write.
#[cfg_attr(test, mockall::automock)]
pub trait EventRepository {
    /// Insert a new event. Fails with `DuplicateId` if the id is taken.
    fn add(&mut self, event: CalendarEvent) -> Result<(), StoreError>;

    /// Merge `patch` onto the event with `id`. Fails with `NotFound`.
    fn update(&mut self, id: &EventId, patch: &EventPatch) -> Result<(), StoreError>;

    /// Remove the event with `id`. Removing an absent id is a no-op.
    fn delete(&mut self, id: &EventId) -> Option<CalendarEvent>;

    fn find_by_date_and_name(&self, date: NaiveDate, name: &str) -> Option<CalendarEvent>;

    /// Produce an id not currently used by any event.
    fn next_id(&mut self, date: NaiveDate) -> EventId;
}

/// In-memory event collection, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    pub(crate) events: Vec<CalendarEvent>,
    pub(crate) next_sequence: u64,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventRepository for EventStore {
    fn add(&mut self, event: CalendarEvent) -> Result<(), StoreError> {
        EventStore::add(self, event)
    }

    fn update(&mut self, id: &EventId, patch: &EventPatch) -> Result<(), StoreError> {
        EventStore::update(self, id, patch)
    }

    fn delete(&mut self, id: &EventId) -> Option<CalendarEvent> {
        EventStore::delete(self, id)
    }

    fn find_by_date_and_name(&self, date: NaiveDate, name: &str) -> Option<CalendarEvent> {
        EventStore::find_by_date_and_name(self, date, name).cloned()
    }

    fn next_id(&mut self, date: NaiveDate) -> EventId {
        EventStore::next_id(self, date)
    }
}
