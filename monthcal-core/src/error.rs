//! Error types for monthcal.

use thiserror::Error;

/// Errors that can occur when building a month grid.
#[derive(Error, Debug)]
pub enum MonthCalError {
    #[error("Month out of range: {0}. Expected 1-12")]
    InvalidMonth(u32),

    #[error("No representable dates for year {year}, month {month}")]
    DateOutOfRange { year: i32, month: u32 },

    #[error("Invalid date key '{0}'. Expected year-month-day")]
    InvalidDateKey(String),
}

/// Result type alias for monthcal operations.
pub type MonthCalResult<T> = Result<T, MonthCalError>;
