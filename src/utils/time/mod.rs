//! 12-hour clock parsing and minute arithmetic.
//!
//! Event times cross every component boundary as `"H:MM AM|PM"` text. They are
//! converted once into minutes since local midnight so overlap tests and
//! geometry become plain integer arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeError;

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// AM/PM marker of a 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

impl FromStr for Meridiem {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AM") {
            Ok(Meridiem::Am)
        } else if s.eq_ignore_ascii_case("PM") {
            Ok(Meridiem::Pm)
        } else {
            Err(TimeError::InvalidFormat(s.to_string()))
        }
    }
}

/// Wall-clock time of day with minute precision, no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from minutes since midnight; `None` past 23:59.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Build from a 24-hour reading.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Build from the discrete selections of a 12-hour picker.
    pub fn from_parts(hour: u8, minute: u8, meridiem: Meridiem) -> Result<Self, TimeError> {
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(TimeError::InvalidFormat(format!(
                "{}:{:02} {}",
                hour, minute, meridiem
            )));
        }

        let hour24 = match meridiem {
            Meridiem::Am => hour % 12,
            Meridiem::Pm => hour % 12 + 12,
        };

        Ok(Self(hour24 as u16 * MINUTES_PER_HOUR + minute as u16))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour on the 24-hour clock (0-23).
    pub fn hour(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Split back into 12-hour picker selections.
    pub fn parts(self) -> (u8, u8, Meridiem) {
        let hour = self.hour();
        let meridiem = if hour < 12 { Meridiem::Am } else { Meridiem::Pm };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        (hour12 as u8, self.minute() as u8, meridiem)
    }

    /// Add (or subtract) minutes, wrapping around midnight.
    pub fn wrapping_add_minutes(self, minutes: i32) -> Self {
        let total = (self.0 as i32 + minutes).rem_euclid(MINUTES_PER_DAY as i32);
        Self(total as u16)
    }

    /// Zero-padded form used by the picker, e.g. `"09:00 AM"`.
    pub fn padded(self) -> String {
        let (hour, minute, meridiem) = self.parts();
        format!("{:02}:{:02} {}", hour, minute, meridiem)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute, meridiem) = self.parts();
        write!(f, "{}:{:02} {}", hour, minute, meridiem)
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidFormat(s.to_string());

        let mut tokens = s.split_whitespace();
        let clock = tokens.next().ok_or_else(invalid)?;
        let meridiem = tokens
            .next()
            .ok_or_else(invalid)?
            .parse::<Meridiem>()
            .map_err(|_| invalid())?;
        if tokens.next().is_some() {
            return Err(invalid());
        }

        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        if !all_digits(hour) || !all_digits(minute) {
            return Err(invalid());
        }

        let hour = hour.parse::<u8>().map_err(|_| invalid())?;
        let minute = minute.parse::<u8>().map_err(|_| invalid())?;
        ClockTime::from_parts(hour, minute, meridiem).map_err(|_| invalid())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse `"H:MM AM|PM"` into minutes since local midnight (0-1439).
pub fn parse_time_to_minutes(time: &str) -> Result<u16, TimeError> {
    time.parse::<ClockTime>().map(ClockTime::minutes)
}

/// Minutes from `start` to `end`. Negative when `end` precedes `start`.
pub fn duration_minutes(start: &str, end: &str) -> Result<i32, TimeError> {
    let start = parse_time_to_minutes(start)?;
    let end = parse_time_to_minutes(end)?;
    Ok(end as i32 - start as i32)
}
