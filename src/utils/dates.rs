use crate::error::{invalid_argument, Error};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// First day of a calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Days between the start of the week and `date`
    fn offset(self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }
}

impl FromStr for WeekStart {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(invalid_argument(&format!("Unknown week start: {}", other))),
        }
    }
}

/// Position of a week inside a month, e.g. "July 2024, week 1"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekOfMonth {
    pub year: i32,
    pub month: u32,
    pub week: u32,
}

/// Format a date as YYYY-MM-DD
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Number of days in the given month, or 0 if the month does not exist
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        // December of the last representable year
        None => 31,
    }
}

/// The seven dates of the week containing `reference`
pub fn week_dates(reference: NaiveDate, week_start: WeekStart) -> [NaiveDate; 7] {
    let first = reference
        .checked_sub_days(Days::new(u64::from(week_start.offset(reference))))
        .unwrap_or(reference);
    std::array::from_fn(|i| {
        first
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Month grid for the month containing `reference`.
///
/// Each row is one week; cells outside the month are `None`.
pub fn weeks_at_month(reference: NaiveDate, week_start: WeekStart) -> Vec<[Option<u32>; 7]> {
    let Some(first) = reference.with_day(1) else {
        return Vec::new();
    };
    let total = days_in_month(first.year(), first.month());

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = week_start.offset(first) as usize;
    for day in 1..=total {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

/// Which month and week number the week of `reference` belongs to.
///
/// A week belongs to the month of its Thursday; week 1 is the week holding
/// the month's first Thursday.
pub fn week_of_month(reference: NaiveDate, week_start: WeekStart) -> WeekOfMonth {
    let thursday = week_dates(reference, week_start)
        .into_iter()
        .find(|d| d.weekday() == Weekday::Thu)
        .unwrap_or(reference);
    let first = thursday.with_day(1).unwrap_or(thursday);
    let to_thursday = (7 + Weekday::Thu.num_days_from_monday()
        - first.weekday().num_days_from_monday())
        % 7;
    let first_thursday = first
        .checked_add_days(Days::new(u64::from(to_thursday)))
        .unwrap_or(first);
    let week = thursday.signed_duration_since(first_thursday).num_days() / 7 + 1;

    WeekOfMonth {
        year: thursday.year(),
        month: thursday.month(),
        week: week as u32,
    }
}
