use campus_core::{month_grid, AnchorMonth, DayCell, EventDraft, EventStore, MemoryEventStore};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

#[test]
fn may_2023_grid_matches_the_known_window() {
    let grid = month_grid(anchor(2023, 5));

    assert_eq!(grid.len(), 35);

    // One leading April day: May 2023 starts on a Monday.
    assert_eq!(grid[0].date, day(2023, 4, 30));
    assert!(grid[0].is_adjacent());
    assert_eq!(grid[1].date, day(2023, 5, 1));
    assert!(grid[1].in_anchor_month);

    // Trailing June days run to the closing Saturday.
    assert_eq!(grid[31].date, day(2023, 5, 31));
    assert!(grid[31].in_anchor_month);
    assert_eq!(grid[32].date, day(2023, 6, 1));
    assert_eq!(grid[34].date, day(2023, 6, 3));
    assert!(grid[34].is_adjacent());
}

#[test]
fn grid_with_no_padding_when_month_starts_sunday_ends_saturday() {
    // February 2026 runs Sunday the 1st through Saturday the 28th.
    let grid = month_grid(anchor(2026, 2));

    assert_eq!(grid.len(), 28);
    assert!(grid.iter().all(|cell| cell.in_anchor_month));
}

#[test]
fn grid_with_maximum_padding_spans_six_weeks() {
    // May 2021 starts on a Saturday and ends on a Monday.
    let grid = month_grid(anchor(2021, 5));

    assert_eq!(grid.len(), 42);
    assert_eq!(grid[0].date, day(2021, 4, 25));
    assert_eq!(grid[41].date, day(2021, 6, 5));
}

#[test]
fn every_grid_is_whole_weeks_of_consecutive_days() {
    for (year, month) in [
        (2023, 1),
        (2023, 2),
        (2023, 5),
        (2023, 12),
        (2024, 2),
        (2021, 5),
        (2026, 2),
    ] {
        let grid = month_grid(anchor(year, month));

        assert_eq!(grid.len() % 7, 0, "{year}-{month} is not whole weeks");
        assert_eq!(grid[0].date.weekday(), Weekday::Sun);
        assert_eq!(grid[grid.len() - 1].date.weekday(), Weekday::Sat);

        for pair in grid.windows(2) {
            assert_eq!(
                pair[1].date,
                pair[0].date + Duration::days(1),
                "{year}-{month} has a gap at {}",
                pair[0].date
            );
        }
    }
}

#[test]
fn grid_contains_every_day_of_the_anchor_month_exactly_once() {
    let grid = month_grid(anchor(2024, 2));
    let in_month: Vec<&DayCell> = grid.iter().filter(|cell| cell.in_anchor_month).collect();

    assert_eq!(in_month.len(), 29);
    assert_eq!(in_month[0].date, day(2024, 2, 1));
    assert_eq!(in_month[28].date, day(2024, 2, 29));
}

#[test]
fn adjacent_cells_still_host_events_dated_within() {
    let mut store = MemoryEventStore::new();
    let mut sendoff = EventDraft::blank(day(2023, 4, 30));
    sendoff.title = "April Sendoff".to_string();
    let id = store.create_event(&sendoff).unwrap();

    let grid = month_grid(anchor(2023, 5));
    let lead = grid[0];
    assert_eq!(lead.date, day(2023, 4, 30));
    assert!(lead.is_adjacent());

    // Muted rendering does not suppress the day's events.
    let hosted = store.events_on(lead.date);
    assert_eq!(hosted.len(), 1);
    assert_eq!(hosted[0].id, id);
    assert!(store.events_on(day(2023, 5, 1)).is_empty());
}

#[test]
fn anchor_navigation_rolls_years() {
    let january = anchor(2023, 1);
    assert_eq!(january.prev(), anchor(2022, 12));
    assert_eq!(january.next(), anchor(2023, 2));
    assert_eq!(anchor(2023, 12).next(), anchor(2024, 1));
}

#[test]
fn anchor_label_and_bounds() {
    let may = anchor(2023, 5);
    assert_eq!(may.label(), "May 2023");
    assert_eq!(may.first_day(), day(2023, 5, 1));
    assert_eq!(may.last_day(), day(2023, 5, 31));
    assert!(may.contains(day(2023, 5, 15)));
    assert!(!may.contains(day(2023, 6, 1)));
}

fn anchor(year: i32, month: u32) -> AnchorMonth {
    AnchorMonth::new(year, month).unwrap()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
