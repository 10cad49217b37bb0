use crate::components::events::CalendarView;
use crate::error::{config_error, env_error, CalendarResult};
use crate::utils::dates::WeekStart;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default location of the events file
pub const DEFAULT_EVENTS_FILE: &str = "data/events.json";

/// Optional configuration file overlaid on the defaults
pub const CONFIG_FILE: &str = "config/calendar.toml";

/// Main configuration structure for the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// IANA timezone used to decide what "today" is
    pub timezone: String,
    /// Locale for translated output and holiday names
    pub locale: String,
    /// First day of the week in week views
    pub week_start: WeekStart,
    /// View used when none is given
    pub default_view: CalendarView,
    /// JSON file holding the event list
    pub events_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: String::from("UTC"),
            locale: String::from("en"),
            week_start: WeekStart::Sunday,
            default_view: CalendarView::Month,
            events_file: String::from(DEFAULT_EVENTS_FILE),
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment.
    ///
    /// Environment variables win over `config/calendar.toml`.
    pub fn load() -> CalendarResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = if Path::new(CONFIG_FILE).exists() {
            debug!("Reading configuration from {}", CONFIG_FILE);
            Self::from_toml_str(&fs::read_to_string(CONFIG_FILE)?)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        config.timezone()?;

        Ok(config)
    }

    /// Parse a full or partial TOML document over the defaults
    pub fn from_toml_str(content: &str) -> CalendarResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from a variable lookup such as the process environment
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CalendarResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(timezone) = lookup("TIMEZONE") {
            self.timezone = timezone;
        }
        if let Some(locale) = lookup("CALENDAR_LOCALE") {
            self.locale = locale;
        }
        if let Some(week_start) = lookup("WEEK_START") {
            self.week_start = week_start
                .parse()
                .map_err(|_| env_error(&format!("Invalid WEEK_START value: {}", week_start)))?;
        }
        if let Some(view) = lookup("DEFAULT_VIEW") {
            self.default_view = view
                .parse()
                .map_err(|_| env_error(&format!("Invalid DEFAULT_VIEW value: {}", view)))?;
        }
        if let Some(events_file) = lookup("EVENTS_FILE") {
            self.events_file = events_file;
        }
        Ok(())
    }

    /// Configured timezone
    pub fn timezone(&self) -> CalendarResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| config_error(&format!("Invalid timezone '{}': {}", self.timezone, e)))
    }

    /// Current date in the configured timezone
    pub fn today(&self) -> CalendarResult<NaiveDate> {
        Ok(Utc::now().with_timezone(&self.timezone()?).date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.default_view, CalendarView::Month);
        assert_eq!(config.events_file, DEFAULT_EVENTS_FILE);
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str(
            r#"
            timezone = "Asia/Seoul"
            week_start = "monday"
            default_view = "week"
            "#,
        )
        .unwrap();
        assert_eq!(config.timezone, "Asia/Seoul");
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.default_view, CalendarView::Week);
        assert_eq!(config.locale, "en");
        assert!(config.timezone().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml_str("week_start = \"friday\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CALENDAR_LOCALE", "ko"),
            ("WEEK_START", "Monday"),
            ("EVENTS_FILE", "/tmp/events.json"),
        ]);
        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.locale, "ko");
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.events_file, "/tmp/events.json");

        let bad = HashMap::from([("DEFAULT_VIEW", "day")]);
        let result = Config::default().apply_overrides(|key| bad.get(key).map(|v| v.to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_timezone() {
        let config = Config {
            timezone: "Mars/Olympus".to_string(),
            ..Config::default()
        };
        assert!(config.timezone().is_err());
        assert!(config.today().is_err());
    }
}
