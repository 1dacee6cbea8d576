//! Calendar event domain model.
//!
//! # Responsibility
//! - Define the canonical event record and its editable draft form.
//! - Validate drafts before they reach the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - A stored title is trimmed and never blank.
//! - `end_time` must not be earlier than `start_time`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for calendar events.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EventId = Uuid;

/// Draft validation failures surfaced to edit flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title is empty after trimming.
    BlankTitle,
    /// End time precedes start time.
    InvalidTimeWindow { start: NaiveTime, end: NaiveTime },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "event title must not be blank"),
            Self::InvalidTimeWindow { start, end } => write!(
                f,
                "event end time {end} is earlier than start time {start}"
            ),
        }
    }
}

impl Error for EventValidationError {}

/// Canonical calendar event record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable global ID used for selection, editing and deletion.
    pub id: EventId,
    pub title: String,
    /// Civil date the event occurs on; day lookups match on exact equality.
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub description: String,
}

impl Event {
    /// Date formatted for compact display, e.g. `2023-05-15`.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Time window formatted for compact display, e.g. `20:00 - 23:00`.
    pub fn time_range_label(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

/// Editable form state for one event, detached from any stored record.
///
/// Shells bind inputs straight to these fields; nothing is validated until
/// the draft is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub description: String,
}

impl EventDraft {
    /// Empty draft for the add-event form, defaulted to a morning slot.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            date,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).expect("10:00 is a valid time"),
            location: String::new(),
            description: String::new(),
        }
    }

    /// Pre-filled draft for editing an existing record.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            location: event.location.clone(),
            description: event.description.clone(),
        }
    }

    /// Checks draft invariants without building a record.
    ///
    /// # Errors
    /// - `BlankTitle` when the title trims to nothing.
    /// - `InvalidTimeWindow` when the end time precedes the start time.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::BlankTitle);
        }
        if self.end_time < self.start_time {
            return Err(EventValidationError::InvalidTimeWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Builds a validated record under the given identity.
    ///
    /// The title is stored trimmed; all other fields are taken as entered.
    pub fn to_event(&self, id: EventId) -> Result<Event, EventValidationError> {
        self.validate()?;
        Ok(Event {
            id,
            title: self.title.trim().to_string(),
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location.clone(),
            description: self.description.clone(),
        })
    }
}
