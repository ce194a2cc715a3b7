use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u8 },

    #[error("Invalid month number: {0}")]
    InvalidMonthNumber(u8),

    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidCivilDate { year: i32, month: u8, day: u8 },

    #[error("Date out of supported range")]
    OutOfRange,

    #[error("Invalid day key: {0}")]
    InvalidDayKey(String),
}

pub type Result<T, E = CalendarError> = std::result::Result<T, E>;
