//! Calendar events and the weekday numbering used to cancel them.
//!
//! An [`Event`] is immutable once built. Its weekday and month are derived
//! from the start date, so the two can never disagree with the date itself.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::month::Month;

/// Map a weekday number (1 = Monday … 7 = Sunday) to a [`Weekday`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeekday`] for any number outside 1..=7.
pub fn weekday_from_number(n: u8) -> Result<Weekday> {
    match n {
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        7 => Ok(Weekday::Sun),
        _ => Err(CalendarError::InvalidWeekday(n)),
    }
}

/// A single, non-repeating calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct Event {
    name: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    duration: u32,
}

impl Event {
    /// Build an event starting at `start` and lasting `duration` minutes.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDuration`] if `duration` is zero or
    /// the event would end past the latest representable date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use event_calendar::{Event, Month};
    ///
    /// let start = NaiveDate::from_ymd_opt(2026, 3, 14)
    ///     .unwrap()
    ///     .and_hms_opt(9, 30, 0)
    ///     .unwrap();
    /// let event = Event::new("Standup", start, 15).unwrap();
    /// assert_eq!(event.month(), Month::March);
    /// assert_eq!(event.end().format("%H:%M").to_string(), "09:45");
    /// ```
    pub fn new(name: impl Into<String>, start: NaiveDateTime, duration: u32) -> Result<Self> {
        let name = name.into();
        if duration == 0 {
            return Err(CalendarError::InvalidDuration(format!(
                "event '{}' must last at least one minute",
                name
            )));
        }
        let end = start
            .checked_add_signed(Duration::minutes(i64::from(duration)))
            .ok_or_else(|| {
                CalendarError::InvalidDuration(format!(
                    "event '{}' starting {} ends out of range",
                    name, start
                ))
            })?;
        Ok(Self {
            name,
            start,
            end,
            duration,
        })
    }

    /// Display name, not necessarily unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start date and time.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Calendar day the event starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Clock time the event starts at.
    pub fn start_time(&self) -> NaiveTime {
        self.start.time()
    }

    /// Duration in minutes, always positive.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// The start plus the duration.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Day of the week, derived from the start date.
    pub fn weekday(&self) -> Weekday {
        self.start.weekday()
    }

    /// The month this event is filed under.
    pub fn month(&self) -> Month {
        Month::from(self.date())
    }

    /// Whether this event starts strictly earlier than `other`.
    ///
    /// Equal start times are not "before", which keeps insertion stable:
    /// a later-inserted event lands after existing events with the same start.
    pub fn comes_before(&self, other: &Event) -> bool {
        self.start < other.start
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}-{} ({} min)",
            self.name,
            self.weekday(),
            self.start.format("%d/%m/%Y"),
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.duration
        )
    }
}

// ── Serialized form ─────────────────────────────────────────────────────────

/// Flat on-disk shape of an event: `{"name", "date", "start", "duration"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EventRecord {
    name: String,
    date: NaiveDate,
    /// Start time as `HH:MM`.
    start: String,
    duration: u32,
}

impl TryFrom<EventRecord> for Event {
    type Error = CalendarError;

    fn try_from(record: EventRecord) -> Result<Self> {
        let time = NaiveTime::parse_from_str(record.start.trim(), "%H:%M")
            .map_err(|e| CalendarError::InvalidTime(format!("'{}': {}", record.start, e)))?;
        Event::new(record.name, record.date.and_time(time), record.duration)
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        EventRecord {
            date: event.date(),
            start: event.start.format("%H:%M").to_string(),
            duration: event.duration,
            name: event.name,
        }
    }
}
