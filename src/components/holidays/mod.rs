mod table;

pub use table::{Holiday, HOLIDAYS};

use crate::utils::i18n::resolve_locale;
use async_trait::async_trait;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Source of public holidays shown next to calendar days
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    /// Holidays in the month containing `reference`, keyed by YYYY-MM-DD.
    ///
    /// Months without holidays yield an empty map.
    async fn fetch_holidays(&self, reference: NaiveDate) -> BTreeMap<String, String>;

    /// Holidays dated from `start` to `end`, both included.
    ///
    /// Fetches every month the range touches, so a week crossing a month
    /// boundary gets the holidays of both months.
    async fn fetch_holidays_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BTreeMap<String, String> {
        let mut holidays = BTreeMap::new();
        let mut month = start.with_day(1).unwrap_or(start);
        while month <= end {
            holidays.extend(self.fetch_holidays(month).await);
            match month.checked_add_months(Months::new(1)) {
                Some(next) => month = next,
                None => break,
            }
        }

        let first = start.format("%Y-%m-%d").to_string();
        let last = end.format("%Y-%m-%d").to_string();
        holidays.retain(|date, _| first <= *date && *date <= last);
        holidays
    }
}

/// Holiday lookup backed by the built-in table
#[derive(Debug, Clone)]
pub struct StaticHolidayProvider {
    locale: String,
}

impl StaticHolidayProvider {
    /// Create a provider returning names in `locale`
    pub fn new(locale: &str) -> Self {
        Self {
            locale: resolve_locale(locale).to_string(),
        }
    }

    /// Locale the holiday names are returned in
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for StaticHolidayProvider {
    fn default() -> Self {
        Self::new("ko")
    }
}

#[async_trait]
impl HolidayProvider for StaticHolidayProvider {
    async fn fetch_holidays(&self, reference: NaiveDate) -> BTreeMap<String, String> {
        let month_prefix = reference.format("%Y-%m-").to_string();
        let holidays: BTreeMap<String, String> = HOLIDAYS
            .iter()
            .filter(|(date, _)| date.starts_with(&month_prefix))
            .map(|(date, holiday)| (date.to_string(), holiday.name(&self.locale)))
            .collect();

        debug!(
            month = %month_prefix.trim_end_matches('-'),
            count = holidays.len(),
            "Looked up holidays"
        );

        holidays
    }
}
