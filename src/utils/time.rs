use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use std::fmt;

/// A wall-clock point in local time, or the invalid sentinel produced when
/// parsing fails.
///
/// Comparisons follow not-a-value rules: anything involving `Invalid` is
/// neither equal, less nor greater, including `Invalid` against itself.
#[derive(Debug, Clone, Copy)]
pub enum Instant {
    At(NaiveDateTime),
    Invalid,
}

impl Instant {
    /// Whether this instant holds a real date and time
    pub fn is_valid(&self) -> bool {
        matches!(self, Instant::At(_))
    }

    /// The underlying date and time, if valid
    pub fn naive(&self) -> Option<NaiveDateTime> {
        match self {
            Instant::At(dt) => Some(*dt),
            Instant::Invalid => None,
        }
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(dt: NaiveDateTime) -> Self {
        Instant::At(dt)
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Instant::At(a), Instant::At(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Instant::At(a), Instant::At(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instant::At(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
            Instant::Invalid => f.write_str("Invalid Date"),
        }
    }
}

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    if !parts.iter().all(|p| p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Parse date string in YYYY-MM-DD format
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let bytes = date_str.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Combine a date and a time string into a local instant.
///
/// Never fails: malformed input on either side yields [`Instant::Invalid`].
pub fn parse_date_time(date: &str, time: &str) -> Instant {
    let Some(date) = parse_date(date) else {
        return Instant::Invalid;
    };
    let Some((hour, minute)) = parse_time(time) else {
        return Instant::Invalid;
    };
    date.and_hms_opt(hour, minute, 0)
        .map(Instant::At)
        .unwrap_or(Instant::Invalid)
}
