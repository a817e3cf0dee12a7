// Test fixtures - reusable test data
// Provides consistent dates, events and templates across test files
#![allow(dead_code)]

use chrono::NaiveDate;
use week_calendar::models::event::CalendarEvent;
use week_calendar::models::template::EventTemplate;
use week_calendar::utils::time::ClockTime;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Thursday, June 5, 2025
    pub fn thursday_june_5_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()
    }

    /// Thursday, June 19, 2025 (busiest day in the mock data)
    pub fn june_19_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 19).unwrap()
    }

    /// Sunday, June 15, 2025 (start of the mock data's busiest week)
    pub fn june_15_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    /// Wednesday, Dec 31, 2025
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

pub fn time(text: &str) -> ClockTime {
    text.parse().unwrap()
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: &str, name: &str, date: NaiveDate, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent::builder()
            .id(id)
            .name(name)
            .date(date)
            .times(start, end)
            .build()
            .unwrap()
    }

    /// Three mutually overlapping meetings on one day
    pub fn nested_meetings(date: NaiveDate) -> Vec<CalendarEvent> {
        vec![
            event("a", "Workshop", date, "9:00 AM", "11:00 AM"),
            event("b", "Call", date, "10:00 AM", "10:30 AM"),
            event("c", "Review", date, "10:15 AM", "10:45 AM"),
        ]
    }
}

/// Sample templates for testing
pub mod templates {
    use super::*;

    /// Weekly Thursday standup starting June 5, 2025
    pub fn standup() -> EventTemplate {
        EventTemplate::new(
            "Standup",
            dates::thursday_june_5_2025(),
            time("09:00 AM"),
            time("09:30 AM"),
        )
    }
}
