use crate::components::events::{find_overlapping_events, validate_time_range, CalendarEvent};
use crate::error::{invalid_argument, CalendarResult};
use crate::utils::time::{parse_date, parse_time};
use tracing::info;

/// Check an event before saving it.
///
/// Fails if the date or either time is malformed, or if the times are in
/// the wrong order. Otherwise returns the stored events it would clash with.
/// A stored event with the same id is the one being edited and is skipped.
pub fn check_event<'a>(
    events: &'a [CalendarEvent],
    candidate: &CalendarEvent,
) -> CalendarResult<Vec<&'a CalendarEvent>> {
    if parse_date(&candidate.date).is_none() {
        return Err(invalid_argument(&format!(
            "Expected a YYYY-MM-DD date, got '{}'",
            candidate.date
        )));
    }
    for time in [&candidate.start_time, &candidate.end_time] {
        if parse_time(time).is_none() {
            return Err(invalid_argument(&format!(
                "Expected an HH:mm time, got '{}'",
                time
            )));
        }
    }
    validate_time_range(&candidate.start_time, &candidate.end_time)?;

    let clashes: Vec<&CalendarEvent> = find_overlapping_events(candidate, events)
        .into_iter()
        .filter(|event| event.id != candidate.id)
        .collect();

    if !clashes.is_empty() {
        info!(
            "Event on {} {} clashes with {} stored events",
            candidate.date,
            candidate.format_time_span(),
            clashes.len()
        );
    }

    Ok(clashes)
}
