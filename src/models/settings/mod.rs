// Settings module
// Week grid geometry and form defaults

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::utils::date::weekday_from_index;
use crate::utils::time::ClockTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixel width of one time slot column
    pub slot_width: f32,
    /// Minutes covered by one slot column
    pub slot_minutes: u16,
    pub event_height: f32,
    pub event_margin: f32,
    /// Fixed vertical padding added to every day row
    pub row_padding: f32,
    pub first_day_of_week: u8, // 0 = Sunday
    pub default_start_time: String,
    pub default_duration_minutes: u16,
    /// Latest year a weekly series may run to
    pub max_end_year: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            slot_width: 100.0,
            slot_minutes: 60,
            event_height: 60.0,
            event_margin: 2.0,
            row_padding: 80.0,
            first_day_of_week: 0,
            default_start_time: "9:00 AM".to_string(),
            default_duration_minutes: 60,
            max_end_year: 2100,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.slot_width > 0.0) {
            return Err("slot_width must be positive".to_string());
        }

        if self.slot_minutes == 0 {
            return Err("slot_minutes must be at least 1".to_string());
        }

        if !(self.event_height > 0.0) {
            return Err("event_height must be positive".to_string());
        }

        if self.event_margin < 0.0 || self.row_padding < 0.0 {
            return Err("event_margin and row_padding cannot be negative".to_string());
        }

        if self.first_day_of_week > 6 {
            return Err("first_day_of_week must be 0 (Sunday) through 6 (Saturday)".to_string());
        }

        if self.default_start_time.parse::<ClockTime>().is_err() {
            return Err(format!(
                "default_start_time {:?} is not a valid H:MM AM|PM time",
                self.default_start_time
            ));
        }

        if self.default_duration_minutes == 0 {
            return Err("default_duration_minutes must be at least 1".to_string());
        }

        Ok(())
    }

    pub fn week_start(&self) -> Weekday {
        weekday_from_index(self.first_day_of_week).unwrap_or(Weekday::Sun)
    }

    /// Vertical distance between consecutive lanes
    pub fn lane_pitch(&self) -> f32 {
        self.event_height + self.event_margin
    }

    pub fn default_start(&self) -> ClockTime {
        self.default_start_time
            .parse()
            .unwrap_or_else(|_| ClockTime::from_hm(9, 0).unwrap_or(ClockTime::MIDNIGHT))
    }
}
