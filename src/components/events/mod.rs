pub mod filter;
pub mod models;
pub mod overlap;
pub mod search;
pub mod time;
pub mod view;

pub use filter::{events_for_day, filter_events, get_filtered_events, matches_search};
pub use models::{CalendarEvent, RepeatInfo, RepeatType};
pub use overlap::{find_overlapping_events, is_overlapping};
pub use search::SearchState;
pub use time::{convert_event_to_date_range, validate_time_range, DateRange};
pub use view::{CalendarView, Direction, ViewWindow};
