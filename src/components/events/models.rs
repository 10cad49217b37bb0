use serde::{Deserialize, Serialize};

/// How often an event repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Recurrence descriptor attached to an event.
///
/// Only stored for round-tripping; occurrences are never expanded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub kind: RepeatType,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

fn default_interval() -> u32 {
    1
}

impl Default for RepeatInfo {
    fn default() -> Self {
        Self {
            kind: RepeatType::None,
            interval: default_interval(),
            end_date: None,
        }
    }
}

/// A calendar event as entered by the user.
///
/// `date` is `YYYY-MM-DD`, `start_time` and `end_time` are `HH:mm` on that
/// same day. Any of them may be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Reminder lead time in minutes before the start
    #[serde(default)]
    pub notification_time: u32,
}

impl CalendarEvent {
    /// Create an event with the given id, date and times and empty text fields
    pub fn new(id: &str, date: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            id: id.to_string(),
            date: date.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            ..Default::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Format the time span as a human-readable string
    pub fn format_time_span(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}
