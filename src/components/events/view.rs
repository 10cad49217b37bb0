use crate::error::{invalid_argument, Error};
use crate::utils::dates::{week_dates, WeekStart};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar display granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Week,
    #[default]
    Month,
}

/// Navigation direction for moving between views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl CalendarView {
    /// Move `current` one view backwards or forwards.
    ///
    /// Weeks move by seven days. Months move by one calendar month and clamp
    /// the day to the end of a shorter month.
    pub fn navigate(self, current: NaiveDate, direction: Direction) -> NaiveDate {
        match direction {
            Direction::Prev => self.shift(current, -1),
            Direction::Next => self.shift(current, 1),
        }
    }

    /// Move `current` by `steps` views in a single jump, negative for
    /// backwards. A jump past the representable date range leaves `current`
    /// unchanged.
    pub fn shift(self, current: NaiveDate, steps: i32) -> NaiveDate {
        let count = steps.unsigned_abs();
        let moved = match (self, steps < 0) {
            (CalendarView::Week, false) => current.checked_add_days(Days::new(u64::from(count) * 7)),
            (CalendarView::Week, true) => current.checked_sub_days(Days::new(u64::from(count) * 7)),
            (CalendarView::Month, false) => current.checked_add_months(Months::new(count)),
            (CalendarView::Month, true) => current.checked_sub_months(Months::new(count)),
        };
        moved.unwrap_or(current)
    }
}

impl FromStr for CalendarView {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            other => Err(invalid_argument(&format!("Unknown calendar view: {}", other))),
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarView::Week => f.write_str("week"),
            CalendarView::Month => f.write_str("month"),
        }
    }
}

/// Inclusive date window shown by a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ViewWindow {
    /// Window of `view` around `reference`
    pub fn new(reference: NaiveDate, view: CalendarView, week_start: WeekStart) -> Self {
        match view {
            CalendarView::Week => {
                let dates = week_dates(reference, week_start);
                Self {
                    start: dates[0],
                    end: dates[6],
                }
            }
            CalendarView::Month => {
                let start = reference.with_day(1).unwrap_or(reference);
                let end = start
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(NaiveDate::MAX);
                Self { start, end }
            }
        }
    }

    /// Whether `date` lies inside the window, ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
