//! Weekly recurrence expansion.
//!
//! A template is repeated every 7 days from its own date through December 31
//! of the requested end year. Each candidate date is reconciled against the
//! store: an existing occurrence with the same name on that date is updated,
//! otherwise a new event is inserted. Running the same expansion twice leaves
//! the store the same size.

use super::EventRepository;
use crate::error::RecurrenceError;
use crate::models::event::EventId;
use crate::models::template::EventTemplate;
use crate::utils::date::year_end;

mod weekly;

pub use weekly::WeeklyDates;

/// Ids touched by one expansion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionReport {
    pub created: Vec<EventId>,
    pub updated: Vec<EventId>,
}

impl ExpansionReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.updated.len()
    }
}

/// Expands "repeat weekly until year Y" directives into stored occurrences.
#[derive(Debug, Clone, Copy)]
pub struct RecurrenceExpander {
    max_end_year: i32,
}

impl RecurrenceExpander {
    pub fn new(max_end_year: i32) -> Self {
        Self { max_end_year }
    }

    /// Every date the series would occupy.
    pub fn occurrence_dates(
        &self,
        template: &EventTemplate,
        end_year: i32,
    ) -> Result<WeeklyDates, RecurrenceError> {
        let invalid = || RecurrenceError::InvalidEndYear {
            end_year,
            start_year: template.year(),
        };

        if end_year < template.year() || end_year > self.max_end_year {
            return Err(invalid());
        }
        let until = year_end(end_year).ok_or_else(invalid)?;

        Ok(WeeklyDates::new(template.date, until))
    }

    /// Write every occurrence of the series into `repo`.
    ///
    /// A store error stops the run; occurrences already written stay in
    /// `repo` and are not rolled back.
    pub fn expand<R>(
        &self,
        repo: &mut R,
        template: &EventTemplate,
        end_year: i32,
    ) -> Result<ExpansionReport, RecurrenceError>
    where
        R: EventRepository + ?Sized,
    {
        let dates = self.occurrence_dates(template, end_year)?;
        let mut report = ExpansionReport::default();

        for date in dates {
            match repo.find_by_date_and_name(date, &template.name) {
                Some(existing) => {
                    log::debug!("Reconciling {} on {} into {}", template.name, date, existing.id);
                    repo.update(&existing.id, &template.patch_for(date))?;
                    report.updated.push(existing.id);
                }
                None => {
                    let id = repo.next_id(date);
                    repo.add(template.occurrence(id.clone(), date))?;
                    report.created.push(id);
                }
            }
        }

        log::info!(
            "Expanded weekly {:?} from {} through {}: {} created, {} updated",
            template.name,
            template.date,
            end_year,
            report.created.len(),
            report.updated.len()
        );
        Ok(report)
    }
}

impl Default for RecurrenceExpander {
    fn default() -> Self {
        Self::new(crate::models::settings::Settings::default().max_end_year)
    }
}
