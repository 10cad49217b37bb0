use super::models::CalendarEvent;
use crate::error::{CalendarResult, Error};
use crate::utils::time::{parse_date_time, parse_time, Instant};

/// Time span an event occupies on its calendar date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: Instant,
    pub end: Instant,
}

/// Convert an event's date and times into a [`DateRange`].
///
/// Start and end are parsed independently, so a malformed start time leaves
/// a well-formed end intact.
pub fn convert_event_to_date_range(event: &CalendarEvent) -> DateRange {
    DateRange {
        start: parse_date_time(&event.date, &event.start_time),
        end: parse_date_time(&event.date, &event.end_time),
    }
}

/// Check that a start time comes strictly before an end time.
///
/// Incomplete or malformed times are not reported.
pub fn validate_time_range(start_time: &str, end_time: &str) -> CalendarResult<()> {
    let (Some(start), Some(end)) = (parse_time(start_time), parse_time(end_time)) else {
        return Ok(());
    };
    if start >= end {
        return Err(Error::InvalidTimeRange {
            start: start_time.to_string(),
            end: end_time.to_string(),
        });
    }
    Ok(())
}
