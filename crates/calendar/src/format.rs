//! `en-AU` display strings for months, weekdays and dates.

use time::{Date, Month, Weekday};

use crate::{CalendarError, CivilDate, Result, WeekStart};

const SHORT_DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `15 Jan`
    #[default]
    Short,
    /// `Wednesday 15 January 2025`
    Long,
}

pub fn month_name(month: u8) -> Result<&'static str> {
    let month = Month::try_from(month).map_err(|_| CalendarError::InvalidMonthNumber(month))?;

    Ok(long_month(month))
}

/// Column headers for a week starting on `week_start`.
pub fn day_names(week_start: WeekStart) -> [&'static str; 7] {
    let mut names = SHORT_DAY_NAMES;
    names.rotate_left(usize::from(week_start.days_from_sunday()));
    names
}

pub fn format_date(date: &CivilDate, style: DateStyle) -> String {
    let month = Date::from(*date).month();

    match style {
        DateStyle::Short => format!("{} {}", date.day(), short_month(month)),
        DateStyle::Long => format!(
            "{} {} {} {}",
            long_weekday(date.weekday()),
            date.day(),
            long_month(month),
            date.year()
        ),
    }
}

fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        // en-AU abbreviates September to four letters
        Month::September => "Sept",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

fn long_month(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

fn long_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}
