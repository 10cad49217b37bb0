use super::view::ViewReport;
use crate::components::events::{events_for_day, CalendarEvent, CalendarView, SearchState};
use crate::utils::dates::{format_date, weeks_at_month, WeekStart};
use chrono::Datelike;
use rust_i18n::t;
use std::collections::BTreeMap;

const SUNDAY_FIRST: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const MONDAY_FIRST: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// One line describing an event
pub fn format_event(event: &CalendarEvent) -> String {
    let mut line = format!("{} {} {}", event.date, event.format_time_span(), event.title);
    if !event.location.is_empty() {
        line.push_str(&format!(" @ {}", event.location));
    }
    line
}

/// Render a view report as text
pub fn render_view(report: &ViewReport<'_>, state: &SearchState) -> String {
    let mut out = format!("{} ({} ~ {})\n", report.title, report.start, report.end);

    if state.view() == CalendarView::Month {
        out.push_str(&render_month_grid(report, state));
        out.push('\n');
    }

    if report.events.is_empty() {
        out.push_str(&format!("{}\n", t!("view_no_events")));
    }
    for entry in &report.events {
        out.push_str(&format!("• {}", format_event(entry.event)));
        if !entry.overlaps.is_empty() {
            out.push_str(&format!("  ⚠ {}", entry.overlaps.join(", ")));
        }
        out.push('\n');
    }

    if !report.holidays.is_empty() {
        out.push_str(&format!("\n{}:\n", t!("view_holidays_title")));
        out.push_str(&render_holidays(&report.holidays));
    }
    out
}

/// Month grid marking days with visible events (`*`) and holidays (`!`)
fn render_month_grid(report: &ViewReport<'_>, state: &SearchState) -> String {
    let current = state.current_date();
    let visible: Vec<&CalendarEvent> = report.events.iter().map(|entry| entry.event).collect();
    let header = match state.week_start() {
        WeekStart::Sunday => SUNDAY_FIRST,
        WeekStart::Monday => MONDAY_FIRST,
    };

    let mut out: String = header.iter().map(|day| format!(" {} ", day)).collect();
    out.push('\n');
    for week in weeks_at_month(current, state.week_start()) {
        for cell in week {
            let Some(day) = cell else {
                out.push_str("    ");
                continue;
            };
            let Some(date) = current.with_day(day) else {
                continue;
            };
            let marker = if !events_for_day(visible.iter().copied(), date).is_empty() {
                '*'
            } else if report.holidays.contains_key(&format_date(date)) {
                '!'
            } else {
                ' '
            };
            out.push_str(&format!("{:>3}{}", day, marker));
        }
        out.push('\n');
    }
    out
}

/// Render a list of clashing events
pub fn render_overlaps(clashes: &[&CalendarEvent]) -> String {
    if clashes.is_empty() {
        return format!("{}\n", t!("overlap_none"));
    }
    let mut out = format!("{}\n", t!("overlap_warning_title"));
    for event in clashes {
        out.push_str(&format!("• {}\n", format_event(event)));
    }
    out
}

/// Render the result of checking an event before saving it
pub fn render_check(clashes: &[&CalendarEvent]) -> String {
    if clashes.is_empty() {
        format!("{}\n", t!("check_ok"))
    } else {
        render_overlaps(clashes)
    }
}

/// Render holidays as "date name" lines
pub fn render_holidays(holidays: &BTreeMap<String, String>) -> String {
    if holidays.is_empty() {
        return format!("{}\n", t!("holidays_none"));
    }
    holidays
        .iter()
        .map(|(date, name)| format!("  {} {}\n", date, name))
        .collect()
}
