use super::filter::filter_events;
use super::models::CalendarEvent;
use super::view::{CalendarView, Direction, ViewWindow};
use crate::utils::dates::WeekStart;
use chrono::NaiveDate;
use tracing::debug;

/// Search term, current date and view of a calendar screen.
///
/// Results are recomputed from this state on every call to
/// [`SearchState::filtered_events`]; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    search_term: String,
    current_date: NaiveDate,
    view: CalendarView,
    week_start: WeekStart,
}

impl SearchState {
    /// Create a new state with an empty search term and Sunday weeks
    pub fn new(current_date: NaiveDate, view: CalendarView) -> Self {
        Self {
            search_term: String::new(),
            current_date,
            view,
            week_start: WeekStart::default(),
        }
    }

    /// Use a different first day of the week
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        debug!(term = %self.search_term, "Search term updated");
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Move the current date one view backwards or forwards
    pub fn navigate(&mut self, direction: Direction) {
        self.current_date = self.view.navigate(self.current_date, direction);
        debug!(date = %self.current_date, view = %self.view, "Navigated calendar");
    }

    /// Move the current date `steps` views at once, negative for backwards
    pub fn shift(&mut self, steps: i32) {
        self.current_date = self.view.shift(self.current_date, steps);
        debug!(date = %self.current_date, view = %self.view, steps, "Shifted calendar");
    }

    /// Date window currently on screen
    pub fn window(&self) -> ViewWindow {
        ViewWindow::new(self.current_date, self.view, self.week_start)
    }

    /// Events visible in the current view that match the search term
    pub fn filtered_events<'a>(&self, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
        filter_events(events, &self.search_term, &self.window())
    }
}
