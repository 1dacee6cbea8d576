//! Month grid construction for the calendar surface.
//!
//! # Responsibility
//! - Resolve anchor months and their previous/next navigation targets.
//! - Build the padded day window that calendar shells render.
//!
//! # Invariants
//! - Grid length is always a multiple of seven.
//! - Grid dates ascend strictly, each exactly one day after the previous.
//! - Lead/trail padding aligns the window to Sunday-started weeks.

use chrono::{Datelike, Duration, NaiveDate};

/// Column headers for a Sunday-started week.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A year/month pair the calendar is currently focused on.
///
/// Constructed only through validating entry points, so day-of-month
/// resolution never fails downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorMonth {
    year: i32,
    month: u32,
}

impl AnchorMonth {
    /// Creates an anchor when `month` is in `1..=12` and the year is in
    /// chrono's representable range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Anchor of the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of this month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("anchor month is validated on construction")
    }

    /// Last calendar day of this month.
    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, month_last_day(self.year, self.month))
            .expect("anchor month is validated on construction")
    }

    /// Anchor of the previous month, rolling the year across January.
    pub fn prev(&self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month).expect("adjacent month stays in chrono's representable range")
    }

    /// Anchor of the next month, rolling the year across December.
    pub fn next(&self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month).expect("adjacent month stays in chrono's representable range")
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Header label, e.g. `May 2023`.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// One grid slot: a date plus whether it belongs to the anchor month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_anchor_month: bool,
}

impl DayCell {
    /// Whether this cell is lead/trail padding from an adjacent month.
    pub fn is_adjacent(&self) -> bool {
        !self.in_anchor_month
    }
}

/// Builds the padded day window for one month.
///
/// Lead padding covers the weekday index of the month's first day (Sunday is
/// zero), trail padding runs to the following Saturday, and the window in
/// between is every day of the month. The result length is therefore always
/// a multiple of seven, and consecutive cells are consecutive days.
pub fn month_grid(anchor: AnchorMonth) -> Vec<DayCell> {
    let first = anchor.first_day();
    let last = anchor.last_day();

    let lead = i64::from(first.weekday().num_days_from_sunday());
    let trail = i64::from(6 - last.weekday().num_days_from_sunday());
    let total = lead + i64::from(last.day()) + trail;
    let window_start = first - Duration::days(lead);

    (0..total)
        .map(|offset| {
            let date = window_start + Duration::days(offset);
            DayCell {
                date,
                in_anchor_month: anchor.contains(date),
            }
        })
        .collect()
}

fn month_last_day(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            let leap = (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0);
            if leap {
                29
            } else {
                28
            }
        }
    }
}
