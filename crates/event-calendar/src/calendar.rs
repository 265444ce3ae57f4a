//! The month-indexed event calendar.
//!
//! Events are grouped by [`Month`] in a `BTreeMap`, so iteration always runs
//! January → December. Within a month the events stay sorted by start
//! (see [`Event::comes_before`]) after every mutation, and a month with no
//! events is never kept as an empty entry.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::Weekday;
use tracing::{debug, trace};

use crate::error::Result;
use crate::event::{weekday_from_number, Event};
use crate::month::Month;

/// In-memory calendar of non-overlapping, non-repeating events.
///
/// Not synchronized: callers sharing a calendar across threads must
/// serialize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    months: BTreeMap<Month, Vec<Event>>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `event` into its month, keeping the month in chronological order.
    ///
    /// The event goes before the first existing event it comes strictly
    /// before, so events with equal start times keep their insertion order.
    /// Overlapping events are accepted as-is.
    pub fn add_event(&mut self, event: Event) {
        let month = event.month();
        let events = self.months.entry(month).or_default();
        let index = insertion_index(events, &event);
        debug!(%month, index, name = event.name(), "adding event");
        events.insert(index, event);
    }

    /// Number of events in `month`, 0 if it has none.
    pub fn total_events_in_month(&self, month: Month) -> usize {
        self.months.get(&month).map_or(0, Vec::len)
    }

    /// Number of events across all months.
    pub fn total_events(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The events of `month` in chronological order (empty if none).
    pub fn events_in(&self, month: Month) -> &[Event] {
        self.months
            .get(&month)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Months holding at least one event, ascending.
    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.months.keys().copied()
    }

    /// `(month, events)` pairs, ascending by month.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &[Event])> + '_ {
        self.months
            .iter()
            .map(|(month, events)| (*month, events.as_slice()))
    }

    /// The months that share the highest event count, ascending.
    ///
    /// Empty when the calendar is empty.
    pub fn months_with_most_events(&self) -> BTreeSet<Month> {
        let mut busiest = BTreeSet::new();
        let mut max = 0;
        for month in self.months.keys() {
            let total = self.total_events_in_month(*month);
            if total > max {
                max = total;
                busiest.clear();
                busiest.insert(*month);
            } else if total == max {
                busiest.insert(*month);
            }
        }
        busiest
    }

    /// Name of the longest event, `None` if the calendar is empty.
    ///
    /// Events are visited by month and then chronologically; on a tie the
    /// first one visited wins.
    pub fn longest_event(&self) -> Option<&str> {
        let mut longest: Option<&Event> = None;
        for event in self.months.values().flatten() {
            if longest.map_or(true, |current| event.duration() > current.duration()) {
                longest = Some(event);
            }
        }
        longest.map(Event::name)
    }

    /// Remove every event on `weekday` (1 = Monday … 7 = Sunday) from each
    /// listed month, returning how many were removed.
    ///
    /// Months without events are skipped; a month emptied by the removal is
    /// dropped from the calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`](crate::CalendarError::InvalidWeekday)
    /// if `weekday` is outside 1..=7. The calendar is left untouched in that case.
    pub fn cancel_events(&mut self, months: &[Month], weekday: u8) -> Result<usize> {
        let weekday = weekday_from_number(weekday)?;
        Ok(self.cancel_events_on(months, weekday))
    }

    /// Same as [`cancel_events`](Self::cancel_events) with an already-typed weekday.
    pub fn cancel_events_on(&mut self, months: &[Month], weekday: Weekday) -> usize {
        let mut removed = 0;
        for month in months {
            let Some(events) = self.months.get_mut(month) else {
                trace!(%month, "no events to cancel");
                continue;
            };

            let before = events.len();
            events.retain(|event| event.weekday() != weekday);
            let cancelled = before - events.len();
            removed += cancelled;
            debug!(%month, %weekday, cancelled, "cancelled events");

            if events.is_empty() {
                self.months.remove(month);
            }
        }
        removed
    }
}

/// Index of the first event that `event` comes strictly before.
fn insertion_index(events: &[Event], event: &Event) -> usize {
    events
        .iter()
        .position(|existing| event.comes_before(existing))
        .unwrap_or(events.len())
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (month, events) in &self.months {
            write!(f, "{}\n\n", month)?;
            for event in events {
                writeln!(f, "{}", event)?;
            }
        }
        Ok(())
    }
}

impl Extend<Event> for Calendar {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.add_event(event);
        }
    }
}

impl FromIterator<Event> for Calendar {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut calendar = Calendar::new();
        calendar.extend(iter);
        calendar
    }
}
