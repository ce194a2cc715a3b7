use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::{CalendarError, CivilDate, Result};

/// A (year, month) pair that addresses a representable calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    pub fn new(year: i32, month: u8) -> Result<Self> {
        CivilDate::new(year, month, 1).map_err(|_| CalendarError::InvalidMonth { year, month })?;

        Ok(Self { year, month })
    }

    pub fn containing(date: CivilDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month containing "now" in the given time zone.
    pub fn current(time_zone: &str) -> Result<Self> {
        Ok(Self::containing(CivilDate::today(time_zone)?))
    }

    pub fn current_at(time_zone: &str, now: OffsetDateTime) -> Result<Self> {
        Ok(Self::containing(CivilDate::today_at(time_zone, now)?))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn first_day(&self) -> Result<CivilDate> {
        CivilDate::new(self.year, self.month, 1)
    }

    pub fn contains(&self, date: &CivilDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Result<Self> {
        match self.month {
            12 => Self::new(self.year + 1, 1),
            month => Self::new(self.year, month + 1),
        }
    }

    pub fn previous(&self) -> Result<Self> {
        match self.month {
            1 => Self::new(self.year - 1, 12),
            month => Self::new(self.year, month - 1),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
