use crate::components::events::{find_overlapping_events, CalendarEvent, CalendarView, SearchState};
use crate::utils::dates::{format_date, week_of_month};
use chrono::Datelike;
use rust_i18n::t;
use serde::Serialize;
use std::collections::BTreeMap;

/// A visible event and the ids of other events it clashes with
#[derive(Debug, Serialize)]
pub struct EventEntry<'a> {
    #[serde(flatten)]
    pub event: &'a CalendarEvent,
    pub overlaps: Vec<&'a str>,
}

/// Everything the calendar shows for one view
#[derive(Debug, Serialize)]
pub struct ViewReport<'a> {
    pub title: String,
    pub view: CalendarView,
    pub start: String,
    pub end: String,
    pub search_term: String,
    pub events: Vec<EventEntry<'a>>,
    pub holidays: BTreeMap<String, String>,
}

/// Title of the current view, e.g. "2024년 7월 1주" or "7/2024"
pub fn view_title(state: &SearchState) -> String {
    match state.view() {
        CalendarView::Week => {
            let position = week_of_month(state.current_date(), state.week_start());
            let (year, month, week) = (position.year, position.month, position.week);
            t!("view_week_title", year = year, month = month, week = week).to_string()
        }
        CalendarView::Month => {
            let (year, month) = (state.current_date().year(), state.current_date().month());
            t!("view_month_title", year = year, month = month).to_string()
        }
    }
}

/// Build the report for `state` over the full event list.
///
/// Overlaps are checked against every other event, not only visible ones.
pub fn build_view_report<'a>(
    events: &'a [CalendarEvent],
    state: &SearchState,
    holidays: BTreeMap<String, String>,
) -> ViewReport<'a> {
    let window = state.window();
    let entries = state
        .filtered_events(events)
        .into_iter()
        .map(|event| {
            let overlaps = find_overlapping_events(event, events)
                .into_iter()
                .filter(|other| other.id != event.id)
                .map(|other| other.id.as_str())
                .collect();
            EventEntry { event, overlaps }
        })
        .collect();

    ViewReport {
        title: view_title(state),
        view: state.view(),
        start: format_date(window.start),
        end: format_date(window.end),
        search_term: state.search_term().to_string(),
        events: entries,
        holidays,
    }
}
