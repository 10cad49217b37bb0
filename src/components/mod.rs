// Export components
pub mod events;
pub mod holidays;

// Re-export the event record and the holiday lookup
pub use events::CalendarEvent;
pub use holidays::{HolidayProvider, StaticHolidayProvider};
