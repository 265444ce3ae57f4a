//! The twelve calendar months, used as the calendar's grouping key.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A calendar month.
///
/// Variants are declared in calendar order, so the derived `Ord` sorts
/// January first and December last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// The month number, 1 (January) through 12 (December).
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// The month for a 1-based month number, or `None` outside 1..=12.
    pub fn from_number(n: u32) -> Option<Month> {
        n.checked_sub(1)
            .and_then(|idx| Month::ALL.get(idx as usize))
            .copied()
    }

    /// Upper-case English name, e.g. `"MARCH"`.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "JANUARY",
            Month::February => "FEBRUARY",
            Month::March => "MARCH",
            Month::April => "APRIL",
            Month::May => "MAY",
            Month::June => "JUNE",
            Month::July => "JULY",
            Month::August => "AUGUST",
            Month::September => "SEPTEMBER",
            Month::October => "OCTOBER",
            Month::November => "NOVEMBER",
            Month::December => "DECEMBER",
        }
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        // chrono guarantees month() is in 1..=12
        Month::ALL[date.month0() as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Accepts full or three-letter English names in any case, or a number 1-12.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let month = match normalized.as_str() {
            "january" | "jan" => Some(Month::January),
            "february" | "feb" => Some(Month::February),
            "march" | "mar" => Some(Month::March),
            "april" | "apr" => Some(Month::April),
            "may" => Some(Month::May),
            "june" | "jun" => Some(Month::June),
            "july" | "jul" => Some(Month::July),
            "august" | "aug" => Some(Month::August),
            "september" | "sep" | "sept" => Some(Month::September),
            "october" | "oct" => Some(Month::October),
            "november" | "nov" => Some(Month::November),
            "december" | "dec" => Some(Month::December),
            other => other.parse::<u32>().ok().and_then(Month::from_number),
        };
        month.ok_or_else(|| CalendarError::InvalidMonth(format!("'{}'", s.trim())))
    }
}
