use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use time::{Date, Duration, Month, OffsetDateTime, Weekday};
use time_tz::{ToTimezone, Tz, timezones};

use crate::{CalendarError, Result, WeekStart};

/// A calendar date with no time-of-day or time zone attached.
///
/// Always a valid proleptic Gregorian date. Ordering is chronological, which
/// is the same as lexicographic on (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate(Date);

impl CivilDate {
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        let invalid = || CalendarError::InvalidCivilDate { year, month, day };
        let month = Month::try_from(month).map_err(|_| invalid())?;

        Date::from_calendar_date(year, month, day)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn add_days(self, days: i64) -> Result<Self> {
        let julian = i64::from(self.0.to_julian_day())
            .checked_add(days)
            .ok_or(CalendarError::OutOfRange)?;

        Self::from_julian_day(julian)
    }

    pub fn subtract_days(self, days: i64) -> Result<Self> {
        let julian = i64::from(self.0.to_julian_day())
            .checked_sub(days)
            .ok_or(CalendarError::OutOfRange)?;

        Self::from_julian_day(julian)
    }

    fn from_julian_day(julian: i64) -> Result<Self> {
        let julian = i32::try_from(julian).map_err(|_| CalendarError::OutOfRange)?;

        Date::from_julian_day(julian)
            .map(Self)
            .map_err(|_| CalendarError::OutOfRange)
    }

    /// -1, 0 or 1.
    pub fn compare(&self, other: &Self) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// First day of the 7-day week containing this date.
    pub fn start_of_week(self, week_start: WeekStart) -> Result<Self> {
        let offset = (self.weekday().number_days_from_sunday() + 7
            - week_start.days_from_sunday())
            % 7;

        self.subtract_days(i64::from(offset))
    }

    pub fn end_of_week(self, week_start: WeekStart) -> Result<Self> {
        self.start_of_week(week_start)?.add_days(6)
    }

    pub fn start_of_month(self) -> Self {
        // Day 1 of a representable month is always representable.
        Self(self.0 - Duration::days(i64::from(self.day() - 1)))
    }

    pub fn end_of_month(self) -> Self {
        let length = month_length(self.year(), self.0.month());

        Self(self.0 + Duration::days(i64::from(length - self.day())))
    }

    pub fn is_same_month(&self, other: &Self) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    /// Civil date of "now" in the named IANA time zone.
    pub fn today(time_zone: &str) -> Result<Self> {
        Self::today_at(time_zone, OffsetDateTime::now_utc())
    }

    pub fn today_at(time_zone: &str, now: OffsetDateTime) -> Result<Self> {
        let tz = lookup_time_zone(time_zone)?;

        Ok(Self(now.to_timezone(tz).date()))
    }

    pub fn is_today(&self, time_zone: &str) -> Result<bool> {
        self.is_today_at(time_zone, OffsetDateTime::now_utc())
    }

    pub fn is_today_at(&self, time_zone: &str, now: OffsetDateTime) -> Result<bool> {
        Ok(*self == Self::today_at(time_zone, now)?)
    }

    /// `YYYY-MM-DD` key used to join events onto grid days.
    pub fn day_key(&self) -> String {
        self.to_string()
    }
}

/// Resolves an IANA time zone name.
pub fn lookup_time_zone(name: &str) -> Result<&'static Tz> {
    timezones::get_by_name(name).ok_or_else(|| CalendarError::InvalidTimeZone(name.to_owned()))
}

/// Number of days in the month, 29 for February in leap years.
pub fn days_in_month(year: i32, month: u8) -> Result<u8> {
    let m = Month::try_from(month).map_err(|_| CalendarError::InvalidMonth { year, month })?;

    Ok(month_length(year, m))
}

fn month_length(year: i32, month: Month) -> u8 {
    match month {
        Month::February if time::util::is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

impl From<Date> for CivilDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl From<CivilDate> for Date {
    fn from(value: CivilDate) -> Self {
        value.0
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year() < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year().unsigned_abs(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` (or `-YYYY-MM-DD` before year 1), ignoring any
    /// `T...` time suffix.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CalendarError::InvalidDayKey(s.to_owned());
        let date = s.split_once('T').map_or(s, |(date, _)| date);
        let (negative, date) = match date.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date),
        };

        let mut parts = date.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(year, 4) || !digits(month, 2) || !digits(day, 2) {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let year = if negative { -year } else { year };
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;

        Self::new(year, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn date(year: i32, month: u8, day: u8) -> CivilDate {
        CivilDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_dates() {
        assert_eq!(
            CivilDate::new(2025, 2, 30),
            Err(CalendarError::InvalidCivilDate {
                year: 2025,
                month: 2,
                day: 30
            })
        );
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 0, 1).is_err());
        assert!(CivilDate::new(2024, 4, 31).is_err());
    }

    #[test]
    fn test_days_in_month_leap_rule() {
        assert_eq!(days_in_month(2024, 2), Ok(29));
        assert_eq!(days_in_month(2023, 2), Ok(28));
        assert_eq!(days_in_month(1900, 2), Ok(28));
        assert_eq!(days_in_month(2000, 2), Ok(29));
        assert_eq!(days_in_month(2025, 9), Ok(30));
        assert_eq!(days_in_month(2025, 12), Ok(31));
        assert!(days_in_month(2025, 13).is_err());
    }

    #[test]
    fn test_add_days_rolls_month_and_year() -> Result<()> {
        assert_eq!(date(2025, 1, 31).add_days(1)?, date(2025, 2, 1));
        assert_eq!(date(2024, 2, 28).add_days(1)?, date(2024, 2, 29));
        assert_eq!(date(2023, 2, 28).add_days(1)?, date(2023, 3, 1));
        assert_eq!(date(2025, 12, 31).add_days(1)?, date(2026, 1, 1));
        assert_eq!(date(2026, 1, 1).subtract_days(1)?, date(2025, 12, 31));
        assert_eq!(date(2024, 3, 1).subtract_days(1)?, date(2024, 2, 29));
        assert_eq!(date(2025, 1, 10).add_days(-10)?, date(2024, 12, 31));
        assert_eq!(date(2024, 1, 1).add_days(366)?, date(2025, 1, 1));

        Ok(())
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert_eq!(
            date(9999, 12, 31).add_days(1),
            Err(CalendarError::OutOfRange)
        );
        assert_eq!(
            date(2025, 1, 1).add_days(i64::MAX),
            Err(CalendarError::OutOfRange)
        );
        assert_eq!(
            date(2025, 1, 1).subtract_days(i64::MIN),
            Err(CalendarError::OutOfRange)
        );
    }

    #[test]
    fn test_compare() {
        assert_eq!(date(2025, 1, 1).compare(&date(2025, 1, 2)), -1);
        assert_eq!(date(2025, 1, 2).compare(&date(2025, 1, 2)), 0);
        assert_eq!(date(2025, 2, 1).compare(&date(2025, 1, 31)), 1);
        assert_eq!(date(2024, 12, 31).compare(&date(2025, 1, 1)), -1);
    }

    #[test]
    fn test_week_bounds_sunday_first() -> Result<()> {
        // 2025-01-15 is a Wednesday
        let wednesday = date(2025, 1, 15);
        assert_eq!(wednesday.start_of_week(WeekStart::Sunday)?, date(2025, 1, 12));
        assert_eq!(wednesday.end_of_week(WeekStart::Sunday)?, date(2025, 1, 18));

        let sunday = date(2025, 1, 12);
        assert_eq!(sunday.start_of_week(WeekStart::Sunday)?, sunday);

        let saturday = date(2025, 1, 18);
        assert_eq!(saturday.start_of_week(WeekStart::Sunday)?, sunday);

        // Crosses into the previous year
        assert_eq!(
            date(2025, 1, 1).start_of_week(WeekStart::Sunday)?,
            date(2024, 12, 29)
        );

        Ok(())
    }

    #[test]
    fn test_week_bounds_monday_first() -> Result<()> {
        let sunday = date(2025, 1, 19);
        assert_eq!(sunday.start_of_week(WeekStart::Monday)?, date(2025, 1, 13));
        assert_eq!(sunday.end_of_week(WeekStart::Monday)?, sunday);

        Ok(())
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(date(2024, 2, 17).start_of_month(), date(2024, 2, 1));
        assert_eq!(date(2024, 2, 17).end_of_month(), date(2024, 2, 29));
        assert_eq!(date(2023, 2, 1).end_of_month(), date(2023, 2, 28));
        assert_eq!(date(9999, 12, 5).end_of_month(), date(9999, 12, 31));
        assert!(date(2025, 3, 31).is_same_month(&date(2025, 3, 1)));
        assert!(!date(2025, 3, 31).is_same_month(&date(2024, 3, 31)));
    }

    #[test]
    fn test_today_in_time_zone() -> Result<()> {
        // 14:00 UTC is 01:00 the next day in Sydney (AEDT, UTC+11)
        let now = datetime!(2025-01-14 14:00:00 UTC);

        assert_eq!(CivilDate::today_at("Australia/Sydney", now)?, date(2025, 1, 15));
        assert_eq!(CivilDate::today_at("UTC", now)?, date(2025, 1, 14));
        assert!(date(2025, 1, 15).is_today_at("Australia/Sydney", now)?);
        assert!(!date(2025, 1, 14).is_today_at("Australia/Sydney", now)?);

        Ok(())
    }

    #[test]
    fn test_today_unknown_time_zone() {
        assert_eq!(
            CivilDate::today("Mars/Olympus_Mons"),
            Err(CalendarError::InvalidTimeZone("Mars/Olympus_Mons".to_owned()))
        );
        assert!(date(2025, 1, 1).is_today("Nowhere").is_err());
    }

    #[test]
    fn test_years_before_one_round_trip() -> Result<()> {
        let early = date(-5, 1, 1);
        assert_eq!(early.to_string(), "-0005-01-01");
        assert_eq!("-0005-01-01".parse::<CivilDate>(), Ok(early));
        let json = serde_json::to_string(&early).unwrap();
        assert_eq!(json, "\"-0005-01-01\"");
        assert_eq!(serde_json::from_str::<CivilDate>(&json).unwrap(), early);

        let earliest = date(-9999, 1, 1);
        assert_eq!(earliest.to_string().parse::<CivilDate>(), Ok(earliest));
        assert_eq!(date(0, 2, 29).to_string(), "0000-02-29");
        assert_eq!("0000-02-29".parse::<CivilDate>(), Ok(date(0, 2, 29)));
        assert_eq!(date(-1, 12, 31).add_days(1)?, date(0, 1, 1));

        Ok(())
    }

    #[test]
    fn test_lookup_time_zone() {
        assert!(lookup_time_zone("Australia/Perth").is_ok());
        assert_eq!(
            lookup_time_zone("Australia/Atlantis").map(|_| ()),
            Err(CalendarError::InvalidTimeZone("Australia/Atlantis".to_owned()))
        );
    }

    #[test]
    fn test_day_key_is_zero_padded() {
        assert_eq!(date(2025, 3, 7).day_key(), "2025-03-07");
        assert_eq!(date(2025, 11, 30).to_string(), "2025-11-30");
    }

    #[test]
    fn test_parse_day_key() {
        assert_eq!("2025-03-07".parse::<CivilDate>(), Ok(date(2025, 3, 7)));
        assert_eq!("2025-03-07T10:15:00+11:00".parse::<CivilDate>(), Ok(date(2025, 3, 7)));
        assert_eq!(
            "2025-3-7".parse::<CivilDate>(),
            Err(CalendarError::InvalidDayKey("2025-3-7".to_owned()))
        );
        assert!("2025-03".parse::<CivilDate>().is_err());
        assert!("2025-03-07-01".parse::<CivilDate>().is_err());
        assert!("abcd-03-07".parse::<CivilDate>().is_err());
        assert!("+202-03-07".parse::<CivilDate>().is_err());
        assert!("2025-+3-07".parse::<CivilDate>().is_err());
        assert!(matches!(
            "2023-02-29".parse::<CivilDate>(),
            Err(CalendarError::InvalidCivilDate { .. })
        ));
    }
}
