use crate::components::events::CalendarEvent;
use crate::config::Config;
use crate::error::{invalid_argument, CalendarResult, Error};
use crate::utils::time::parse_date;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

// Export submodules
pub mod check;
pub mod output;
pub mod overlaps;
pub mod view;

/// Read the event list from a JSON array file.
///
/// A missing file is an empty calendar.
pub fn load_events(path: impl AsRef<Path>) -> CalendarResult<Vec<CalendarEvent>> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("Events file {} not found, starting with no events", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let events: Vec<CalendarEvent> = serde_json::from_str(&content)?;
    debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Resolve the reference date from a command argument, defaulting to today
pub fn reference_date(arg: Option<&str>, config: &Config) -> CalendarResult<NaiveDate> {
    match arg {
        Some(date) => parse_date(date)
            .ok_or_else(|| invalid_argument(&format!("Expected a YYYY-MM-DD date, got '{}'", date))),
        None => config.today(),
    }
}

/// Find an event by its id
pub fn find_event<'a>(events: &'a [CalendarEvent], id: &str) -> CalendarResult<&'a CalendarEvent> {
    events
        .iter()
        .find(|event| event.id == id)
        .ok_or_else(|| Error::EventNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_date() {
        let config = Config::default();
        assert_eq!(
            reference_date(Some("2024-07-01"), &config).unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
        );
        assert!(matches!(
            reference_date(Some("07/01/2024"), &config),
            Err(Error::InvalidArgument(_))
        ));
        assert!(reference_date(None, &config).is_ok());
    }

    #[test]
    fn test_find_event() {
        let events = vec![
            CalendarEvent::new("a", "2024-07-01", "09:00", "10:00"),
            CalendarEvent::new("b", "2024-07-01", "11:00", "12:00"),
        ];
        assert_eq!(find_event(&events, "b").unwrap().start_time, "11:00");
        assert!(matches!(find_event(&events, "c"), Err(Error::EventNotFound(_))));
    }
}
