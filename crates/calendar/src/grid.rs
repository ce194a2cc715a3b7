use serde::Serialize;
use time::OffsetDateTime;

use crate::{CalendarError, CivilDate, Result, WEEK_START};

/// Cells in a month view: six rows of seven days, whatever the month.
pub const GRID_DAYS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: CivilDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_past: bool,
    pub is_future: bool,
}

/// Builds the 42-day grid for a month view, classified against "now".
pub fn build_month_grid(year: i32, month: u8, time_zone: &str) -> Result<Vec<CalendarDay>> {
    build_month_grid_at(year, month, time_zone, OffsetDateTime::now_utc())
}

#[tracing::instrument(skip(now))]
pub fn build_month_grid_at(
    year: i32,
    month: u8,
    time_zone: &str,
    now: OffsetDateTime,
) -> Result<Vec<CalendarDay>> {
    let invalid_month = |_| CalendarError::InvalidMonth { year, month };

    let reference = CivilDate::new(year, month, 1).map_err(invalid_month)?;
    let today = CivilDate::today_at(time_zone, now)?;

    let grid_start = reference
        .start_of_month()
        .start_of_week(WEEK_START)
        .map_err(invalid_month)?;

    let mut days = Vec::with_capacity(GRID_DAYS);

    for offset in 0..GRID_DAYS as i64 {
        let date = grid_start.add_days(offset).map_err(invalid_month)?;

        days.push(CalendarDay {
            date,
            is_current_month: date.is_same_month(&reference),
            is_today: date == today,
            is_past: date.compare(&today) < 0,
            is_future: date.compare(&today) > 0,
        });
    }

    tracing::debug!(
        grid_start = %grid_start,
        today = %today,
        "month grid built"
    );

    Ok(days)
}

/// The seven days of the week containing `anchor`.
pub fn build_week(anchor: CivilDate) -> Result<Vec<CivilDate>> {
    let start = anchor.start_of_week(WEEK_START)?;

    (0..7).map(|offset| start.add_days(offset)).collect()
}

/// Splits a grid, or anything laid out like one, into rows of seven.
pub fn weeks<T>(days: &[T]) -> impl Iterator<Item = &[T]> {
    days.chunks(7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_grid_start_is_sunday_before_first() -> Result<()> {
        let now = datetime!(2025-01-15 00:00:00 UTC);
        // 2025-03-01 is a Saturday
        let grid = build_month_grid_at(2025, 3, "UTC", now)?;

        assert_eq!(grid.len(), GRID_DAYS);
        assert_eq!(grid[0].date, CivilDate::new(2025, 2, 23)?);
        assert_eq!(grid[6].date, CivilDate::new(2025, 3, 1)?);
        assert!(!grid[5].is_current_month);
        assert!(grid[6].is_current_month);
        assert_eq!(grid[41].date, CivilDate::new(2025, 4, 5)?);

        Ok(())
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_overshoot() -> Result<()> {
        let now = datetime!(2025-01-15 00:00:00 UTC);
        // 2025-06-01 is a Sunday
        let grid = build_month_grid_at(2025, 6, "UTC", now)?;

        assert_eq!(grid[0].date, CivilDate::new(2025, 6, 1)?);
        assert!(grid[0].is_current_month);
        assert_eq!(
            grid.iter().filter(|d| d.is_current_month).count(),
            30
        );

        Ok(())
    }

    #[test]
    fn test_invalid_month() {
        let now = datetime!(2025-01-15 00:00:00 UTC);

        assert_eq!(
            build_month_grid_at(2025, 13, "UTC", now),
            Err(CalendarError::InvalidMonth {
                year: 2025,
                month: 13
            })
        );
        assert!(build_month_grid_at(2025, 0, "UTC", now).is_err());
        // The trailing overshoot of December 9999 is not representable
        assert_eq!(
            build_month_grid_at(9999, 12, "UTC", now),
            Err(CalendarError::InvalidMonth {
                year: 9999,
                month: 12
            })
        );
    }

    #[test]
    fn test_invalid_time_zone() {
        let now = datetime!(2025-01-15 00:00:00 UTC);

        assert_eq!(
            build_month_grid_at(2025, 1, "Not/AZone", now),
            Err(CalendarError::InvalidTimeZone("Not/AZone".to_owned()))
        );
    }

    #[test]
    fn test_weeks_splits_six_rows() -> Result<()> {
        let now = datetime!(2025-01-15 00:00:00 UTC);
        let grid = build_month_grid_at(2025, 2, "UTC", now)?;
        let rows = weeks(&grid).collect::<Vec<_>>();

        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.len() == 7));

        Ok(())
    }

    #[test]
    fn test_build_week() -> Result<()> {
        let week = build_week(CivilDate::new(2025, 1, 1)?)?;

        assert_eq!(week.len(), 7);
        assert_eq!(week[0], CivilDate::new(2024, 12, 29)?);
        assert_eq!(week[6], CivilDate::new(2025, 1, 4)?);

        Ok(())
    }
}
