//! Time access seam for the otherwise pure engines.
//!
//! # Responsibility
//! - Isolate "now" behind a trait so flows stay deterministic under test.
//! - Provide the relative-time phrasing used on feed cards and comments.
//!
//! # Invariants
//! - Core code never reads the wall clock directly; it goes through `Clock`.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

/// Source of the current instant and civil date.
pub trait Clock {
    /// Current instant used for relative-time labels.
    fn now(&self) -> DateTime<Utc>;
    /// Current civil date used for calendar defaults and `Today` navigation.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used by real shells.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Relative-time phrase for a past instant, e.g. `2 hours ago`.
///
/// Buckets are coarse on purpose; cards only need a rough distance. Instants
/// in the future clamp to `just now`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed < Duration::zero() {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        pluralize(minutes, "minute")
    } else if hours < 24 {
        pluralize(hours, "hour")
    } else if days < 30 {
        pluralize(days, "day")
    } else if days < 365 {
        pluralize(days / 30, "month")
    } else {
        pluralize(days / 365, "year")
    }
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
