//! Event form controller.
//!
//! Holds the working draft behind the create/edit form and turns a submit
//! into store writes: a single add, a full update, or a weekly expansion.
//! Validation failures stay on the form as a message; store contract
//! violations are returned to the caller.

use chrono::{Datelike, NaiveDate};

use crate::error::{CalendarError, ValidationError};
use crate::models::event::{CalendarEvent, EventId};
use crate::models::settings::Settings;
use crate::models::template::EventTemplate;
use crate::services::event::recurrence::{ExpansionReport, RecurrenceExpander};
use crate::services::event::EventRepository;
use crate::utils::date::{format_event_date, parse_event_date};
use crate::utils::time::{ClockTime, MINUTES_PER_HOUR};

mod draft;

pub use draft::{DraftFields, EventDraft, RepeatWeekly, TimeSelection, MINUTE_OPTIONS};

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(EventId),
    Updated(EventId),
    Expanded(ExpansionReport),
    /// Validation failed; the form is still open with the error shown
    Rejected(ValidationError),
    /// No form was open
    NothingToSubmit,
}

pub struct FormController {
    settings: Settings,
    expander: RecurrenceExpander,
    draft: Option<EventDraft>,
    repeat: RepeatWeekly,
    error: Option<ValidationError>,
}

impl FormController {
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            expander: RecurrenceExpander::new(settings.max_end_year),
            draft: None,
            repeat: RepeatWeekly {
                enabled: false,
                end_year: settings.max_end_year,
            },
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&EventDraft> {
        self.draft.as_ref()
    }

    pub fn repeat(&self) -> RepeatWeekly {
        self.repeat
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// New event with the configured default start and duration.
    pub fn open_new(&mut self, date: NaiveDate) {
        let start = self.settings.default_start();
        let end = start.wrapping_add_minutes(self.settings.default_duration_minutes as i32);
        self.open(EventDraft::Create(DraftFields::new(date, start, end)), date);
    }

    /// New event from a clicked grid slot, one hour long.
    pub fn open_at_slot(&mut self, date: NaiveDate, slot: ClockTime) {
        let end = slot.wrapping_add_minutes(MINUTES_PER_HOUR as i32);
        self.open(EventDraft::Create(DraftFields::new(date, slot, end)), date);
    }

    pub fn open_for_event(&mut self, event: &CalendarEvent) {
        let draft = EventDraft::Edit {
            id: event.id.clone(),
            fields: DraftFields::from(event),
        };
        self.open(draft, event.date);
    }

    fn open(&mut self, draft: EventDraft, date: NaiveDate) {
        log::debug!("Opening {} form for {}", if draft.is_edit() { "edit" } else { "create" }, date);
        self.draft = Some(draft);
        self.error = None;
        self.repeat = RepeatWeekly {
            enabled: false,
            end_year: self.clamped_end_year(date.year(), date.year() + 1),
        };
    }

    /// Discard the draft without touching the store.
    pub fn cancel(&mut self) {
        if self.draft.take().is_some() {
            log::debug!("Event form cancelled");
        }
        self.error = None;
    }

    fn fields_mut(&mut self) -> Option<&mut DraftFields> {
        self.draft.as_mut().map(EventDraft::fields_mut)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(fields) = self.fields_mut() {
            fields.name = name.into();
        }
    }

    pub fn set_start_time(&mut self, text: impl Into<String>) {
        if let Some(fields) = self.fields_mut() {
            fields.start_time = text.into();
        }
    }

    pub fn set_end_time(&mut self, text: impl Into<String>) {
        if let Some(fields) = self.fields_mut() {
            fields.end_time = text.into();
        }
    }

    pub fn set_start_selection(&mut self, selection: TimeSelection) -> Result<(), ValidationError> {
        let time = selection.to_clock_time()?;
        self.set_start_time(time.padded());
        Ok(())
    }

    pub fn set_end_selection(&mut self, selection: TimeSelection) -> Result<(), ValidationError> {
        let time = selection.to_clock_time()?;
        self.set_end_time(time.padded());
        Ok(())
    }

    /// Free-text day/month/year entry.
    pub fn set_date_text(&mut self, text: impl Into<String>) {
        if let Some(fields) = self.fields_mut() {
            fields.date_text = text.into();
        }
        self.clamp_end_year_to_draft();
    }

    /// Date chosen from the picker.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.set_date_text(format_event_date(date));
    }

    pub fn set_repeat_weekly(&mut self, enabled: bool) {
        self.repeat.enabled = enabled;
    }

    pub fn set_end_year(&mut self, end_year: i32) {
        self.repeat.end_year = match self.draft_year() {
            Some(year) => self.clamped_end_year(year, end_year),
            None => end_year.min(self.settings.max_end_year),
        };
    }

    fn draft_year(&self) -> Option<i32> {
        let fields = self.draft.as_ref()?.fields();
        parse_event_date(&fields.date_text).ok().map(|date| date.year())
    }

    // Strictly after the template year, never past the configured limit.
    fn clamped_end_year(&self, year: i32, end_year: i32) -> i32 {
        end_year.max(year + 1).min(self.settings.max_end_year)
    }

    fn clamp_end_year_to_draft(&mut self) {
        if let Some(year) = self.draft_year() {
            self.repeat.end_year = self.clamped_end_year(year, self.repeat.end_year);
        }
    }

    /// Check the draft and build the template a submit would write.
    pub fn validate(&self) -> Result<Option<EventTemplate>, ValidationError> {
        let Some(draft) = self.draft.as_ref() else {
            return Ok(None);
        };
        let fields = draft.fields();

        let name = fields.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let date = parse_event_date(&fields.date_text)?;
        let start: ClockTime = fields.start_time.parse()?;
        let end: ClockTime = fields.end_time.parse()?;

        if start >= end {
            return Err(ValidationError::InvalidTimeRange {
                start: fields.start_time.clone(),
                end: fields.end_time.clone(),
            });
        }

        if self.repeat.enabled && date.year() >= self.settings.max_end_year {
            return Err(ValidationError::EndYearOutOfRange {
                year: date.year(),
                max_end_year: self.settings.max_end_year,
            });
        }

        Ok(Some(EventTemplate::new(name, date, start, end)))
    }

    /// Write the draft to `repo`.
    ///
    /// Successful writes close the form. A validation failure keeps it open
    /// and is reported as [`SubmitOutcome::Rejected`].
    pub fn submit<R>(&mut self, repo: &mut R) -> Result<SubmitOutcome, CalendarError>
    where
        R: EventRepository + ?Sized,
    {
        let template = match self.validate() {
            Ok(Some(template)) => template,
            Ok(None) => return Ok(SubmitOutcome::NothingToSubmit),
            Err(error) => {
                log::debug!("Event form rejected: {}", error);
                self.error = Some(error.clone());
                return Ok(SubmitOutcome::Rejected(error));
            }
        };

        let edit_id = self.draft.as_ref().and_then(EventDraft::id).cloned();

        let outcome = if self.repeat.enabled {
            let report = self.expander.expand(repo, &template, self.repeat.end_year)?;
            SubmitOutcome::Expanded(report)
        } else if let Some(id) = edit_id {
            repo.update(&id, &template.patch_for(template.date))?;
            log::info!("Updated event {} ({})", id, template.name);
            SubmitOutcome::Updated(id)
        } else {
            let id = repo.next_id(template.date);
            repo.add(template.occurrence(id.clone(), template.date))?;
            log::info!("Created event {} ({})", id, template.name);
            SubmitOutcome::Created(id)
        };

        self.draft = None;
        self.error = None;
        Ok(outcome)
    }

    /// Remove the event being edited. Create drafts have nothing to delete.
    pub fn delete<R>(&mut self, repo: &mut R) -> Option<CalendarEvent>
    where
        R: EventRepository + ?Sized,
    {
        let id = self.draft.as_ref()?.id()?.clone();
        let removed = repo.delete(&id);
        log::info!("Deleted event {}", id);
        self.draft = None;
        self.error = None;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::services::event::{EventStore, MockEventRepository};
    use crate::utils::time::Meridiem;
    use pretty_assertions::assert_eq;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(text: &str) -> ClockTime {
        text.parse().unwrap()
    }

    fn form() -> FormController {
        FormController::new(&Settings::default())
    }

    #[test]
    fn test_open_new_uses_default_start_and_duration() {
        let mut form = form();
        form.open_new(ymd(2025, 6, 19));

        let fields = form.draft().unwrap().fields();
        assert_eq!(fields.date_text, "19/06/2025");
        assert_eq!(fields.start_time, "09:00 AM");
        assert_eq!(fields.end_time, "10:00 AM");
        assert_eq!(form.repeat(), RepeatWeekly { enabled: false, end_year: 2026 });
    }

    #[test]
    fn test_open_at_slot_spans_one_hour() {
        let mut form = form();
        form.open_at_slot(ymd(2025, 6, 19), time("2:00 PM"));

        let fields = form.draft().unwrap().fields();
        assert_eq!(fields.start_time, "02:00 PM");
        assert_eq!(fields.end_time, "03:00 PM");
    }

    #[test]
    fn test_last_slot_wraps_and_fails_range_check() {
        let mut store = EventStore::new();
        let mut form = form();
        form.open_at_slot(ymd(2025, 6, 19), time("11:00 PM"));
        form.set_name("Late");

        assert_eq!(form.draft().unwrap().fields().end_time, "12:00 AM");
        let outcome = form.submit(&mut store).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(ValidationError::InvalidTimeRange { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reversed_times_keep_form_open() {
        let mut store = EventStore::with_mock_data().unwrap();
        let before = store.events().to_vec();

        let mut form = form();
        form.open_new(ymd(2025, 6, 19));
        form.set_name("Review");
        form.set_start_time("10:00 AM");
        form.set_end_time("09:00 AM");

        let outcome = form.submit(&mut store).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::InvalidTimeRange {
                start: "10:00 AM".to_string(),
                end: "09:00 AM".to_string(),
            })
        );
        assert!(form.is_open());
        assert_eq!(
            form.error_message().as_deref(),
            Some("Start time must be earlier than end time.")
        );
        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn test_validation_order() {
        let mut form = form();
        form.open_new(ymd(2025, 6, 19));
        form.set_date_text("31/2/2025");
        form.set_start_time("nine");
        assert_eq!(form.validate(), Err(ValidationError::EmptyName));

        form.set_name("Planning");
        assert!(matches!(form.validate(), Err(ValidationError::InvalidDate(_))));

        form.set_date_text("5/6/2025");
        assert!(matches!(form.validate(), Err(ValidationError::InvalidTimeFormat(_))));

        form.set_start_time("9:00 AM");
        assert!(form.validate().unwrap().is_some());
    }

    #[test]
    fn test_create_adds_one_event_and_closes() {
        let mut store = EventStore::new();
        let mut form = form();
        form.open_new(ymd(2025, 6, 19));
        form.set_name("  Retro  ");

        let SubmitOutcome::Created(id) = form.submit(&mut store).unwrap() else {
            panic!("expected a created event");
        };

        assert!(!form.is_open());
        assert!(form.error().is_none());
        let event = store.get(&id).unwrap();
        assert_eq!(event.name, "Retro");
        assert_eq!(event.start_time, time("9:00 AM"));
        assert!(id.as_str().starts_with("event-19062025-"));
    }

    #[test]
    fn test_edit_replaces_fields() {
        let mut store = EventStore::with_mock_data().unwrap();
        let original = store.get(&EventId::from("event-4")).unwrap().clone();

        let mut form = form();
        form.open_for_event(&original);
        form.set_name("Client Sync (moved)");
        form.set_date(ymd(2025, 6, 20));
        form.set_start_selection(TimeSelection::new(3, 0, Meridiem::Pm)).unwrap();
        form.set_end_selection(TimeSelection::new(4, 30, Meridiem::Pm)).unwrap();

        let outcome = form.submit(&mut store).unwrap();
        assert_eq!(outcome, SubmitOutcome::Updated(EventId::from("event-4")));

        let updated = store.get(&EventId::from("event-4")).unwrap();
        assert_eq!(updated.name, "Client Sync (moved)");
        assert_eq!(updated.date, ymd(2025, 6, 20));
        assert_eq!(updated.start_time.to_string(), "3:00 PM");
        assert_eq!(updated.end_time.to_string(), "4:30 PM");
        assert_eq!(store.len(), 11);
    }

    #[test]
    fn test_repeat_weekly_expands_through_end_year() {
        let mut store = EventStore::new();
        let mut form = form();
        form.open_new(ymd(2025, 6, 5));
        form.set_name("Standup");
        form.set_start_time("09:00 AM");
        form.set_end_time("09:30 AM");
        form.set_repeat_weekly(true);

        let SubmitOutcome::Expanded(report) = form.submit(&mut store).unwrap() else {
            panic!("expected an expansion");
        };

        // 30 Thursdays left in 2025, 53 in 2026
        assert_eq!(report.created.len(), 83);
        assert_eq!(store.len(), 83);
        assert!(!form.is_open());
    }

    #[test]
    fn test_end_year_stays_after_template_year() {
        let mut form = form();
        form.open_new(ymd(2025, 6, 5));

        form.set_end_year(2024);
        assert_eq!(form.repeat().end_year, 2026);

        form.set_end_year(2028);
        form.set_date(ymd(2030, 1, 2));
        assert_eq!(form.repeat().end_year, 2031);

        form.set_end_year(2500);
        assert_eq!(form.repeat().end_year, 2100);
    }

    #[test]
    fn test_unparseable_date_leaves_end_year_alone() {
        let mut form = form();
        form.open_new(ymd(2025, 6, 5));
        form.set_end_year(2030);
        form.set_date_text("not a date");
        assert_eq!(form.repeat().end_year, 2030);
    }

    #[test]
    fn test_years_beyond_four_digits_are_rejected() {
        let mut store = EventStore::new();
        let mut form = form();
        form.open_new(ymd(2025, 6, 19));
        form.set_name("Far future");
        form.set_date_text("31/12/262142");

        let outcome = form.submit(&mut store).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(ValidationError::InvalidDate(_))));
        assert!(form.is_open());
        assert!(store.is_empty());
    }

    #[test]
    fn test_last_four_digit_year_saves_and_reopens() {
        let mut store = EventStore::new();
        let mut form = form();
        form.open_new(ymd(9999, 12, 31));
        form.set_name("Millennium");

        let SubmitOutcome::Created(id) = form.submit(&mut store).unwrap() else {
            panic!("expected a created event");
        };
        assert_eq!(id.as_str(), "event-31129999-1");

        let stored = store.get(&id).unwrap().clone();
        form.open_for_event(&stored);
        assert_eq!(form.draft().unwrap().fields().date_text, "31/12/9999");
        assert_eq!(form.submit(&mut store).unwrap(), SubmitOutcome::Updated(id));
    }

    #[test]
    fn test_series_cannot_start_in_last_year() {
        let mut store = EventStore::new();
        let mut form = form();
        form.open_new(ymd(2100, 3, 1));
        form.set_name("Too late");
        form.set_repeat_weekly(true);

        let outcome = form.submit(&mut store).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::EndYearOutOfRange {
                year: 2100,
                max_end_year: 2100
            })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_only_for_edit_drafts() {
        let mut store = EventStore::with_mock_data().unwrap();
        let mut form = form();

        form.open_new(ymd(2025, 6, 19));
        assert!(form.delete(&mut store).is_none());
        assert!(form.is_open());
        assert_eq!(store.len(), 11);

        let target = store.get(&EventId::from("event-2")).unwrap().clone();
        form.open_for_event(&target);
        let removed = form.delete(&mut store).unwrap();
        assert_eq!(removed.id, EventId::from("event-2"));
        assert!(!form.is_open());
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut store = EventStore::new();
        let mut form = form();
        form.open_new(ymd(2025, 6, 19));
        form.set_name("Draft");
        form.cancel();

        assert!(!form.is_open());
        assert_eq!(form.submit(&mut store).unwrap(), SubmitOutcome::NothingToSubmit);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_errors_propagate_and_keep_draft() {
        let mut repo = MockEventRepository::new();
        repo.expect_next_id()
            .returning(|_| EventId::from("event-0"));
        repo.expect_add()
            .times(1)
            .returning(|event| Err(StoreError::DuplicateId(event.id)));

        let mut form = form();
        form.open_new(ymd(2025, 6, 19));
        form.set_name("Collision");

        let result = form.submit(&mut repo);
        assert!(matches!(
            result,
            Err(CalendarError::Store(StoreError::DuplicateId(_)))
        ));
        assert!(form.is_open());
    }

    #[test]
    fn test_edit_update_goes_through_repository() {
        let event = CalendarEvent::new(
            EventId::from("event-9"),
            "Q3 Kickoff",
            ymd(2025, 7, 3),
            time("10:00 AM"),
            time("11:00 AM"),
        );

        let mut repo = MockEventRepository::new();
        repo.expect_update()
            .withf(|id, patch| {
                id.as_str() == "event-9"
                    && patch.name.as_deref() == Some("Q3 Kickoff")
                    && patch.end_time == Some(time("11:30 AM"))
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut form = form();
        form.open_for_event(&event);
        form.set_end_time("11:30 AM");

        assert_eq!(
            form.submit(&mut repo).unwrap(),
            SubmitOutcome::Updated(EventId::from("event-9"))
        );
    }
}
