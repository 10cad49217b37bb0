use super::models::CalendarEvent;
use super::view::{CalendarView, ViewWindow};
use crate::utils::dates::WeekStart;
use crate::utils::time::parse_date;
use chrono::NaiveDate;

/// Case-insensitive search over title, description and location.
///
/// An empty term matches everything. The term is not trimmed.
pub fn matches_search(event: &CalendarEvent, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let term = search_term.to_lowercase();
    [&event.title, &event.description, &event.location]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Events matching `search_term` whose date lies inside `window`.
///
/// Events with an unparseable date are never shown.
pub fn filter_events<'a>(
    events: &'a [CalendarEvent],
    search_term: &str,
    window: &ViewWindow,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| matches_search(event, search_term))
        .filter(|event| parse_date(&event.date).is_some_and(|date| window.contains(date)))
        .collect()
}

/// Events matching `search_term` within the week (Sunday to Saturday) or
/// month containing `reference`, in input order.
pub fn get_filtered_events<'a>(
    events: &'a [CalendarEvent],
    search_term: &str,
    reference: NaiveDate,
    view: CalendarView,
) -> Vec<&'a CalendarEvent> {
    let window = ViewWindow::new(reference, view, WeekStart::Sunday);
    filter_events(events, search_term, &window)
}

/// Events dated exactly on `day`
pub fn events_for_day<'a, I>(events: I, day: NaiveDate) -> Vec<&'a CalendarEvent>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    events
        .into_iter()
        .filter(|event| parse_date(&event.date) == Some(day))
        .collect()
}
