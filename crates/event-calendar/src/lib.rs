//! # event-calendar
//!
//! An in-memory calendar of non-overlapping, non-repeating events grouped
//! by month.
//!
//! Each month keeps its events in chronological order as they are added, and
//! months without events are never stored. On top of that the calendar
//! answers a few aggregate questions: how many events a month holds, which
//! months are busiest, which event is longest. It can also cancel every event
//! on a given weekday across a set of months.
//!
//! ## Modules
//!
//! - [`calendar`] — The [`Calendar`] container and its queries
//! - [`event`] — The immutable [`Event`] value and weekday numbering
//! - [`month`] — The [`Month`] grouping key
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod event;
pub mod month;

pub use calendar::Calendar;
pub use chrono::Weekday;
pub use error::{CalendarError, Result};
pub use event::{weekday_from_number, Event};
pub use month::Month;
