use super::models::CalendarEvent;
use super::time::convert_event_to_date_range;
use tracing::debug;

/// Whether two events occupy intersecting time.
///
/// Ranges are half-open, so back-to-back events do not overlap. Any invalid
/// date or time makes the result `false`.
pub fn is_overlapping(a: &CalendarEvent, b: &CalendarEvent) -> bool {
    let a = convert_event_to_date_range(a);
    let b = convert_event_to_date_range(b);
    a.start < b.end && a.end > b.start
}

/// Every event in `pool` overlapping `candidate`, in pool order.
///
/// No self-exclusion is done; leave the candidate out of `pool` when editing
/// an existing event.
pub fn find_overlapping_events<'a>(
    candidate: &CalendarEvent,
    pool: &'a [CalendarEvent],
) -> Vec<&'a CalendarEvent> {
    let overlapping: Vec<&CalendarEvent> = pool
        .iter()
        .filter(|event| is_overlapping(candidate, event))
        .collect();

    debug!(
        candidate = %candidate.id,
        pool = pool.len(),
        overlapping = overlapping.len(),
        "Checked event for overlaps"
    );

    overlapping
}
