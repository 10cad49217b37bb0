use chrono::NaiveDate;
use kalenteri::components::events::{
    get_filtered_events, CalendarEvent, CalendarView, Direction, RepeatInfo, RepeatType,
    SearchState,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(events: &[&CalendarEvent]) -> Vec<String> {
    events.iter().map(|e| e.id.clone()).collect()
}

fn mock_events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent::new("1", "2024-07-01", "09:00", "10:00").with_title("이벤트 1"),
        CalendarEvent::new("2", "2024-07-02", "09:00", "10:00").with_title("이벤트 2"),
    ]
}

fn meeting_events() -> Vec<CalendarEvent> {
    let repeat = RepeatInfo {
        kind: RepeatType::None,
        interval: 1,
        end_date: Some("2024-10-08".to_string()),
    };
    let mut meeting = CalendarEvent::new("1", "2024-10-01", "09:00", "10:00")
        .with_title("회의")
        .with_description("팀 미팅")
        .with_location("회의실")
        .with_category("meeting");
    meeting.repeat = repeat.clone();
    meeting.notification_time = 30;
    let mut lunch = CalendarEvent::new("2", "2024-10-02", "12:00", "13:00")
        .with_title("점심")
        .with_description("팀 점심")
        .with_location("식당")
        .with_category("meal");
    lunch.repeat = repeat;
    lunch.notification_time = 15;
    vec![meeting, lunch]
}

#[test]
fn test_search_term_matches_single_event() {
    let events = mock_events();
    let found = get_filtered_events(&events, "이벤트 2", date(2024, 7, 1), CalendarView::Week);
    assert_eq!(found, vec![&events[1]]);
}

#[test]
fn test_week_view_of_2024_07_01() {
    let events = mock_events();
    let found = get_filtered_events(&events, "", date(2024, 7, 1), CalendarView::Week);
    assert_eq!(ids(&found), vec!["1", "2"]);
}

#[test]
fn test_month_view_of_july_2024() {
    let events = mock_events();
    let found = get_filtered_events(&events, "", date(2024, 7, 1), CalendarView::Month);
    assert_eq!(ids(&found), vec!["1", "2"]);
}

#[test]
fn test_search_and_week_view_combined() {
    let events = mock_events();
    let found = get_filtered_events(&events, "이벤트", date(2024, 7, 1), CalendarView::Week);
    assert_eq!(ids(&found), vec!["1", "2"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let events = vec![
        CalendarEvent::new("1", "2024-07-01", "09:00", "10:00").with_title("Team Meeting"),
        CalendarEvent::new("2", "2024-07-02", "09:00", "10:00").with_title("Lunch"),
    ];
    let found = get_filtered_events(&events, "team MEETING", date(2024, 7, 1), CalendarView::Week);
    assert_eq!(ids(&found), vec!["1"]);
}

#[test]
fn test_month_boundaries() {
    let events = vec![
        CalendarEvent::new("before", "2024-06-30", "09:00", "10:00"),
        CalendarEvent::new("first", "2024-07-01", "09:00", "10:00"),
        CalendarEvent::new("last", "2024-07-31", "09:00", "10:00"),
        CalendarEvent::new("after", "2024-08-01", "09:00", "10:00"),
    ];
    let found = get_filtered_events(&events, "", date(2024, 7, 15), CalendarView::Month);
    assert_eq!(ids(&found), vec!["first", "last"]);
}

#[test]
fn test_next_month_excluded_from_both_views() {
    let events = vec![CalendarEvent::new("aug", "2024-08-01", "09:00", "10:00")];
    let reference = date(2024, 7, 1);
    assert!(get_filtered_events(&events, "", reference, CalendarView::Week).is_empty());
    assert!(get_filtered_events(&events, "", reference, CalendarView::Month).is_empty());
}

#[test]
fn test_empty_event_list() {
    assert!(get_filtered_events(&[], "", date(2024, 7, 1), CalendarView::Week).is_empty());
}

#[test]
fn test_filter_does_not_mutate_input() {
    let events = mock_events();
    let before = events.clone();
    let _ = get_filtered_events(&events, "이벤트 1", date(2024, 7, 1), CalendarView::Month);
    assert_eq!(events, before);
}

#[test]
fn test_search_state_empty_term_returns_all() {
    let events = meeting_events();
    let state = SearchState::new(date(2024, 10, 1), CalendarView::Month);
    assert_eq!(state.filtered_events(&events), vec![&events[0], &events[1]]);
}

#[test]
fn test_search_state_filters_by_term() {
    let events = meeting_events();
    let mut state = SearchState::new(date(2024, 10, 1), CalendarView::Month);
    state.set_search_term("회의");
    assert_eq!(state.filtered_events(&events), vec![&events[0]]);
}

#[test]
fn test_search_matches_title_description_or_location() {
    let events = vec![
        CalendarEvent::new("1", "2024-10-01", "09:00", "10:00")
            .with_title("회의")
            .with_description("일반 미팅")
            .with_location("회의실"),
        CalendarEvent::new("2", "2024-10-02", "12:00", "13:00")
            .with_title("점심")
            .with_description("회의하며 식사")
            .with_location("식당"),
        CalendarEvent::new("3", "2024-10-03", "15:00", "16:00")
            .with_title("휴식")
            .with_description("휴식")
            .with_location("회의실"),
    ];
    let mut state = SearchState::new(date(2024, 10, 1), CalendarView::Month);
    state.set_search_term("회의");
    assert_eq!(ids(&state.filtered_events(&events)), vec!["1", "2", "3"]);
}

#[test]
fn test_search_state_week_view() {
    let events = vec![
        CalendarEvent::new("1", "2024-10-01", "09:00", "10:00").with_title("회의"),
        CalendarEvent::new("2", "2024-10-08", "12:00", "13:00").with_title("점심"),
    ];
    let state = SearchState::new(date(2024, 10, 1), CalendarView::Week);
    assert_eq!(ids(&state.filtered_events(&events)), vec!["1"]);
}

#[test]
fn test_search_state_term_change_updates_results() {
    let events = meeting_events();
    let mut state = SearchState::new(date(2024, 10, 1), CalendarView::Month);

    state.set_search_term("회의");
    assert_eq!(ids(&state.filtered_events(&events)), vec!["1"]);

    state.set_search_term("점심");
    assert_eq!(ids(&state.filtered_events(&events)), vec!["2"]);
}

#[test]
fn test_search_state_navigation() {
    let events = vec![
        CalendarEvent::new("1", "2024-10-01", "09:00", "10:00"),
        CalendarEvent::new("2", "2024-10-08", "12:00", "13:00"),
    ];
    let mut state = SearchState::new(date(2024, 10, 1), CalendarView::Week);
    state.navigate(Direction::Next);
    assert_eq!(ids(&state.filtered_events(&events)), vec!["2"]);
    state.navigate(Direction::Prev);
    assert_eq!(ids(&state.filtered_events(&events)), vec!["1"]);
}
