use campus_core::{
    EventDraft, EventStore, EventValidationError, MemoryEventStore, StoreError,
};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

#[test]
fn create_assigns_fresh_unique_ids() {
    let mut store = MemoryEventStore::new();
    let draft = draft_on("Career Fair", 2023, 5, 20);

    let first = store.create_event(&draft).unwrap();
    let second = store.create_event(&draft).unwrap();

    assert_ne!(first, second);
    assert!(store.get_event(first).is_some());
    assert!(store.get_event(second).is_some());
    assert_eq!(store.list_events().len(), 2);
}

#[test]
fn blank_title_is_rejected_and_store_is_unchanged() {
    let mut store = MemoryEventStore::new();
    let blank = draft_on("   ", 2023, 5, 20);

    let err = store.create_event(&blank).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(EventValidationError::BlankTitle)
    ));
    assert!(store.list_events().is_empty());
}

#[test]
fn reversed_time_window_is_rejected() {
    let mut store = MemoryEventStore::new();
    let mut bad = draft_on("Career Fair", 2023, 5, 20);
    bad.start_time = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
    bad.end_time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();

    let err = store.create_event(&bad).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(EventValidationError::InvalidTimeWindow { .. })
    ));
    assert!(store.list_events().is_empty());
}

#[test]
fn created_event_appears_on_exactly_its_date() {
    let mut store = MemoryEventStore::new();
    let id = store
        .create_event(&draft_on("Career Fair", 2023, 5, 20))
        .unwrap();

    let on_day = store.events_on(day(2023, 5, 20));
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].id, id);
    assert_eq!(on_day[0].title, "Career Fair");

    assert!(store.events_on(day(2023, 5, 19)).is_empty());
    assert!(store.events_on(day(2023, 5, 21)).is_empty());
    assert!(store.events_on(day(2024, 5, 20)).is_empty());
}

#[test]
fn update_replaces_every_field_except_id() {
    let mut store = MemoryEventStore::new();
    let id = store
        .create_event(&draft_on("Career Fair", 2023, 5, 20))
        .unwrap();

    let mut changed = draft_on("Career Fair (rescheduled)", 2023, 5, 21);
    changed.location = "New Hall".to_string();
    changed.description = "Now in the new hall.".to_string();
    store.update_event(id, &changed).unwrap();

    let loaded = store.get_event(id).unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.title, "Career Fair (rescheduled)");
    assert_eq!(loaded.date, day(2023, 5, 21));
    assert_eq!(loaded.location, "New Hall");
    assert_eq!(loaded.description, "Now in the new hall.");
    assert_eq!(store.list_events().len(), 1);
}

#[test]
fn update_unknown_id_returns_not_found() {
    let mut store = MemoryEventStore::new();
    let ghost = Uuid::new_v4();

    let err = store
        .update_event(ghost, &draft_on("Career Fair", 2023, 5, 20))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == ghost));
}

#[test]
fn failed_update_leaves_the_record_untouched() {
    let mut store = MemoryEventStore::new();
    let id = store
        .create_event(&draft_on("Career Fair", 2023, 5, 20))
        .unwrap();

    let err = store.update_event(id, &draft_on("  ", 2023, 5, 21)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(EventValidationError::BlankTitle)
    ));

    let loaded = store.get_event(id).unwrap();
    assert_eq!(loaded.title, "Career Fair");
    assert_eq!(loaded.date, day(2023, 5, 20));
}

#[test]
fn delete_removes_exactly_the_target() {
    let mut store = MemoryEventStore::new();
    let keep = store
        .create_event(&draft_on("End of Semester Party", 2023, 5, 15))
        .unwrap();
    let remove = store
        .create_event(&draft_on("Career Fair", 2023, 5, 20))
        .unwrap();

    store.delete_event(remove).unwrap();

    assert!(store.get_event(remove).is_none());
    assert!(store.get_event(keep).is_some());
    assert_eq!(store.list_events().len(), 1);

    let err = store.delete_event(remove).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == remove));
}

#[test]
fn listings_preserve_insertion_order() {
    let mut store = MemoryEventStore::new();
    let first = store
        .create_event(&draft_on("Morning Yoga", 2023, 5, 20))
        .unwrap();
    let second = store
        .create_event(&draft_on("Career Fair", 2023, 5, 20))
        .unwrap();

    let all = store.list_events();
    assert_eq!(all[0].id, first);
    assert_eq!(all[1].id, second);

    let same_day = store.events_on(day(2023, 5, 20));
    assert_eq!(same_day[0].id, first);
    assert_eq!(same_day[1].id, second);
}

#[test]
fn seeding_rejects_duplicate_ids() {
    let event = draft_on("Career Fair", 2023, 5, 20)
        .to_event(Uuid::new_v4())
        .unwrap();
    let twin = event.clone();

    let err = MemoryEventStore::with_events(vec![event, twin]).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(_)));
}

#[test]
fn seeding_revalidates_records() {
    let mut event = draft_on("Career Fair", 2023, 5, 20)
        .to_event(Uuid::new_v4())
        .unwrap();
    event.title = "  ".to_string();

    let err = MemoryEventStore::with_events(vec![event]).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(EventValidationError::BlankTitle)
    ));
}

#[test]
fn seeding_accepts_the_snapshot_events() {
    let store = MemoryEventStore::with_events(campus_core::seed::sample_events()).unwrap();

    assert_eq!(store.list_events().len(), 3);
    assert_eq!(store.events_on(day(2023, 5, 15)).len(), 1);
    assert_eq!(store.events_on(day(2023, 5, 20)).len(), 1);
    assert_eq!(store.events_on(day(2023, 5, 10)).len(), 1);
}

fn draft_on(title: &str, year: i32, month: u32, day_of_month: u32) -> EventDraft {
    let mut draft = EventDraft::blank(day(year, month, day_of_month));
    draft.title = title.to_string();
    draft.location = "Engineering Building".to_string();
    draft.description = "Connect with potential employers.".to_string();
    draft
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
