//! Week view projection.
//!
//! Turns the store snapshot and a reference date into the 7-day window the
//! grid paints: events bucketed per day, packed into lanes, and placed with
//! pixel geometry. Slot columns run horizontally (one per hour by default)
//! and lanes stack vertically inside each day row.

use chrono::{Datelike, NaiveDate};

use super::overlap::pack_into_lanes;
use crate::error::DateError;
use crate::models::event::CalendarEvent;
use crate::models::layout::{DayRow, DisplayEvent, Lane, PositionedEvent, WeekLayout};
use crate::models::settings::Settings;
use crate::utils::date::{week_dates, week_title, weekday_name};
use crate::utils::time::{ClockTime, MINUTES_PER_DAY, MINUTES_PER_HOUR};

/// Column header labels, `"12:00 AM"` through `"11:00 PM"`.
pub fn hour_labels() -> Vec<String> {
    (0..24)
        .filter_map(|hour| ClockTime::from_hm(hour, 0))
        .map(|time| time.to_string())
        .collect()
}

pub struct WeekViewProjector {
    settings: Settings,
}

impl WeekViewProjector {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The 7 dates shown for `reference`.
    pub fn window(&self, reference: NaiveDate) -> Result<[NaiveDate; 7], DateError> {
        week_dates(reference, self.settings.week_start()).ok_or(DateError::OutOfRange(reference))
    }

    /// Horizontal pixel position of a minute offset from midnight.
    fn minutes_to_px(&self, minutes: f32) -> f32 {
        minutes / self.settings.slot_minutes as f32 * self.settings.slot_width
    }

    /// Lay out every event that falls inside the week containing `reference`.
    ///
    /// Fails only at the very ends of the calendar, where the week around
    /// `reference` cannot be represented.
    pub fn project<'a, I>(&self, reference: NaiveDate, events: I) -> Result<WeekLayout, DateError>
    where
        I: IntoIterator<Item = &'a CalendarEvent>,
    {
        let dates = self.window(reference)?;
        let (window_start, window_end) = (dates[0], dates[6]);

        let mut buckets: [Vec<DisplayEvent>; 7] = Default::default();
        let mut earliest: Option<u16> = None;

        for event in events {
            if event.date < window_start || event.date > window_end {
                continue;
            }
            let offset = (event.date - window_start).num_days() as usize;
            earliest = Some(match earliest {
                Some(minutes) => minutes.min(event.start_time.minutes()),
                None => event.start_time.minutes(),
            });
            buckets[offset].push(DisplayEvent::from(event));
        }

        let days: Vec<DayRow> = dates
            .iter()
            .zip(buckets)
            .map(|(date, bucket)| self.day_row(*date, pack_into_lanes(bucket)))
            .collect();

        let scroll_hour = earliest.map_or(0, |minutes| minutes / MINUTES_PER_HOUR);

        Ok(WeekLayout {
            window_start,
            window_end,
            title: week_title(window_start, window_end, reference.year()),
            hour_labels: hour_labels(),
            days,
            scroll_hour,
            scroll_offset: self.minutes_to_px((scroll_hour * MINUTES_PER_HOUR) as f32),
            grid_width: self.minutes_to_px(MINUTES_PER_DAY as f32),
        })
    }

    fn day_row(&self, date: NaiveDate, lanes: Vec<Lane>) -> DayRow {
        let pitch = self.settings.lane_pitch();

        let positioned: Vec<Vec<PositionedEvent>> = lanes
            .iter()
            .enumerate()
            .map(|(lane_index, lane)| {
                lane.iter()
                    .map(|event| PositionedEvent {
                        id: event.id.clone(),
                        title: event.title.clone(),
                        start: event.start,
                        end: event.end,
                        lane: lane_index,
                        left: self.minutes_to_px(event.start_minutes() as f32),
                        width: self.minutes_to_px(event.duration_minutes() as f32).max(0.0),
                        top: lane_index as f32 * pitch,
                        height: self.settings.event_height - self.settings.event_margin,
                    })
                    .collect()
            })
            .collect();

        if !positioned.is_empty() {
            log::debug!("{} packs into {} lane(s)", date, positioned.len());
        }

        DayRow {
            date,
            weekday: weekday_name(date.weekday()),
            day_of_month: date.day(),
            height: positioned.len() as f32 * pitch + self.settings.row_padding,
            lanes: positioned,
        }
    }
}

impl Default for WeekViewProjector {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
