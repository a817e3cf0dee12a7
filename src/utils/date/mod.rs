// Date utility functions
// Day/month/year text handling and week window math

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::DateError;

/// Parse a `D/M/YYYY` date. Day and month may be zero-padded or not; the
/// year is exactly four digits.
pub fn parse_event_date(text: &str) -> Result<NaiveDate, DateError> {
    let invalid = || DateError::InvalidDate(text.to_string());

    let parts: Vec<&str> = text.trim().split('/').collect();
    let [day, month, year] = parts[..] else {
        return Err(invalid());
    };

    let numeric = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !numeric(day) || !numeric(month) || !numeric(year) {
        return Err(invalid());
    }
    if day.len() > 2 || month.len() > 2 || year.len() != 4 {
        return Err(invalid());
    }

    let day = day.parse::<u32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Canonical display form, `DD/MM/YYYY`.
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Digits-only form used inside generated event ids.
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

/// Weekday for a `0 = Sunday .. 6 = Saturday` index.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// First day of the week containing `date`, if it is representable.
pub fn start_of_week(date: NaiveDate, first_day: Weekday) -> Option<NaiveDate> {
    let back = (date.weekday().num_days_from_sunday() + 7 - first_day.num_days_from_sunday()) % 7;
    date.checked_sub_signed(Duration::days(back as i64))
}

/// The 7 consecutive dates of the week containing `date`. `None` at the
/// edges of the calendar where the full week does not exist.
pub fn week_dates(date: NaiveDate, first_day: Weekday) -> Option<[NaiveDate; 7]> {
    let start = start_of_week(date, first_day)?;
    let mut dates = [start; 7];
    for (offset, slot) in dates.iter_mut().enumerate().skip(1) {
        *slot = start.checked_add_signed(Duration::days(offset as i64))?;
    }
    Some(dates)
}

/// Move `date` by whole weeks (negative goes back).
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    Duration::try_weeks(weeks).and_then(|delta| date.checked_add_signed(delta))
}

/// December 31 of `year`.
pub fn year_end(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

/// Header label such as `Jun 15 - Jun 21, 2025`.
pub fn week_title(start: NaiveDate, end: NaiveDate, year: i32) -> String {
    format!(
        "{} - {}, {}",
        start.format("%b %-d"),
        end.format("%b %-d"),
        year
    )
}
