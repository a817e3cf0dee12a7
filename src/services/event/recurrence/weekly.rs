use chrono::{Duration, NaiveDate};

/// Dates from `start` stepping exactly one week, up to and including `until`.
#[derive(Debug, Clone)]
pub struct WeeklyDates {
    current: Option<NaiveDate>,
    until: NaiveDate,
}

impl WeeklyDates {
    pub fn new(start: NaiveDate, until: NaiveDate) -> Self {
        Self {
            current: Some(start),
            until,
        }
    }
}

impl Iterator for WeeklyDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.current.filter(|date| *date <= self.until)?;
        self.current = current.checked_add_signed(Duration::weeks(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(current) if current <= self.until => {
                let remaining = ((self.until - current).num_days() / 7 + 1) as usize;
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for WeeklyDates {}
