//! Reads event records from disk and fills a calendar with them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use event_calendar::{Calendar, Event};
use tracing::info;

/// Parse a JSON array of event records.
///
/// Each record looks like
/// `{"name": "Dentist", "date": "2026-03-02", "start": "09:05", "duration": 45}`.
/// Records may appear in any order.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    serde_json::from_str(json).context("Failed to parse event records")
}

pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file: {}", path.display()))?;
    parse_events(&json).with_context(|| format!("Invalid events file: {}", path.display()))
}

/// Load every event in `path` into a fresh calendar.
pub fn load_calendar(path: &Path) -> Result<Calendar> {
    let events = load_events(path)?;
    let count = events.len();
    let calendar: Calendar = events.into_iter().collect();
    info!(
        path = %path.display(),
        events = count,
        months = calendar.months().count(),
        "loaded calendar"
    );
    Ok(calendar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_calendar::Month;

    #[test]
    fn test_parse_unsorted_records() {
        let json = r#"[
            {"name": "Late", "date": "2026-03-10", "start": "10:00", "duration": 30},
            {"name": "Early", "date": "2026-03-10", "start": "08:00", "duration": 30}
        ]"#;
        let calendar: Calendar = parse_events(json).unwrap().into_iter().collect();
        let names: Vec<_> = calendar
            .events_in(Month::March)
            .iter()
            .map(Event::name)
            .collect();
        assert_eq!(names, vec!["Early", "Late"]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_events("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_zero_duration() {
        let json = r#"[{"name": "Oops", "date": "2026-03-10", "start": "10:00", "duration": 0}]"#;
        let err = parse_events(json).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid duration"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_events(Path::new("/nonexistent/events.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read events file"));
    }
}
