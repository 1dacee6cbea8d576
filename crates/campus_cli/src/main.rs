//! Terminal smoke driver for the campus engines.
//!
//! # Responsibility
//! - Stand up the calendar and feed on seed content, the way a UI shell
//!   would, and render a quick textual snapshot.
//! - Exercise logging bootstrap outside of tests.

use campus_core::{
    default_log_level, init_logging, CalendarView, CommentThread, EventStore, LogOutbox,
    MemoryEventStore, PostFeed, SystemClock, WEEKDAY_LABELS,
};
use chrono::{Datelike, Utc};

fn main() {
    if let Err(err) = run() {
        eprintln!("campus_cli: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let log_dir = std::env::temp_dir().join("campus_cli_logs");
    let log_dir = log_dir.to_str().ok_or("log dir is not valid UTF-8")?;
    init_logging(default_log_level(), log_dir)?;

    println!("campus_core {}", campus_core::core_version());

    let store = MemoryEventStore::with_events(campus_core::seed::sample_events())
        .map_err(|err| err.to_string())?;
    let view = CalendarView::new(store, SystemClock);

    println!();
    println!("{}", view.anchor().label());
    println!("{}", WEEKDAY_LABELS.join(" "));
    for week in view.grid().chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                if cell.in_anchor_month {
                    format!("{:>3}", cell.date.day())
                } else {
                    "  .".to_string()
                }
            })
            .collect();
        println!("{}", row.join(" "));
    }

    println!();
    for event in view.store().list_events() {
        println!(
            "{}  {}  {} @ {}",
            event.date_label(),
            event.time_range_label(),
            event.title,
            event.location
        );
    }

    let now = Utc::now();
    let feed = PostFeed::new(campus_core::seed::sample_posts(now));
    println!();
    for item in feed.items() {
        println!(
            "[{:>3}] {}  ({}, {})",
            item.vote_state().score(),
            item.post.title,
            item.post.community_name,
            item.age_label(now)
        );
    }

    println!();
    for community in campus_core::seed::trending_communities() {
        println!("{:<16} {}", community.name, community.member_count_label());
    }

    let mut thread = CommentThread::new(campus_core::seed::sample_comments(now));
    let mut outbox = LogOutbox;
    if let Some(item) = feed.items().first() {
        thread.set_comment_text("Great tips, thanks for sharing!");
        let sent = thread.submit_comment(item.post.id, &mut outbox);
        println!();
        println!("thread nodes={} comment_sent={}", thread.len(), sent);
    }

    Ok(())
}
