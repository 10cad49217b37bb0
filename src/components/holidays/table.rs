use lazy_static::lazy_static;
use rust_i18n::t;
use std::collections::BTreeMap;

/// Korean public holidays known to the static lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    NewYear,
    Seollal,
    IndependenceMovementDay,
    ChildrensDay,
    MemorialDay,
    LiberationDay,
    Chuseok,
    NationalFoundationDay,
    HangulDay,
    Christmas,
}

impl Holiday {
    /// Localized name of the holiday
    pub fn name(self, locale: &str) -> String {
        let name = match self {
            Holiday::NewYear => t!("holiday_new_year", locale = locale),
            Holiday::Seollal => t!("holiday_seollal", locale = locale),
            Holiday::IndependenceMovementDay => {
                t!("holiday_independence_movement_day", locale = locale)
            }
            Holiday::ChildrensDay => t!("holiday_childrens_day", locale = locale),
            Holiday::MemorialDay => t!("holiday_memorial_day", locale = locale),
            Holiday::LiberationDay => t!("holiday_liberation_day", locale = locale),
            Holiday::Chuseok => t!("holiday_chuseok", locale = locale),
            Holiday::NationalFoundationDay => t!("holiday_national_foundation_day", locale = locale),
            Holiday::HangulDay => t!("holiday_hangul_day", locale = locale),
            Holiday::Christmas => t!("holiday_christmas", locale = locale),
        };
        name.to_string()
    }
}

lazy_static! {
    /// Holidays keyed by YYYY-MM-DD
    pub static ref HOLIDAYS: BTreeMap<&'static str, Holiday> = {
        use Holiday::*;
        BTreeMap::from([
            ("2024-01-01", NewYear),
            ("2024-02-09", Seollal),
            ("2024-02-10", Seollal),
            ("2024-02-11", Seollal),
            ("2024-03-01", IndependenceMovementDay),
            ("2024-05-05", ChildrensDay),
            ("2024-06-06", MemorialDay),
            ("2024-08-15", LiberationDay),
            ("2024-09-16", Chuseok),
            ("2024-09-17", Chuseok),
            ("2024-09-18", Chuseok),
            ("2024-10-03", NationalFoundationDay),
            ("2024-10-09", HangulDay),
            ("2024-12-25", Christmas),
            ("2025-01-01", NewYear),
            ("2025-01-28", Seollal),
            ("2025-01-29", Seollal),
            ("2025-01-30", Seollal),
            ("2025-03-01", IndependenceMovementDay),
            ("2025-05-05", ChildrensDay),
            ("2025-06-06", MemorialDay),
            ("2025-08-15", LiberationDay),
            ("2025-10-03", NationalFoundationDay),
            ("2025-10-05", Chuseok),
            ("2025-10-06", Chuseok),
            ("2025-10-07", Chuseok),
            ("2025-10-09", HangulDay),
            ("2025-12-25", Christmas),
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_date;

    #[test]
    fn test_table_dates_are_valid() {
        assert!(HOLIDAYS.keys().all(|date| parse_date(date).is_some()));
    }

    #[test]
    fn test_holiday_names() {
        assert_eq!(Holiday::LiberationDay.name("ko"), "광복절");
        assert_eq!(Holiday::Christmas.name("ko"), "크리스마스");
        assert_eq!(Holiday::Christmas.name("en"), "Christmas Day");
    }
}
