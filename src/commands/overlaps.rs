use super::find_event;
use crate::components::events::{find_overlapping_events, CalendarEvent};
use crate::error::CalendarResult;

/// Events clashing with the stored event `id`, in list order.
///
/// The event itself is left out of the result.
pub fn overlapping_with<'a>(
    events: &'a [CalendarEvent],
    id: &str,
) -> CalendarResult<Vec<&'a CalendarEvent>> {
    let candidate = find_event(events, id)?;
    Ok(find_overlapping_events(candidate, events)
        .into_iter()
        .filter(|event| event.id != candidate.id)
        .collect())
}
