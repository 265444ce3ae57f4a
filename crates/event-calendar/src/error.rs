//! Error types for calendar operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid weekday: {0} (expected 1 = Monday through 7 = Sunday)")]
    InvalidWeekday(u8),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
