//! Event store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the calendar's event collection.
//! - Keep mutation semantics atomic: a failed call changes nothing.
//!
//! # Invariants
//! - Write paths must call `EventDraft::validate()` before any mutation.
//! - `update_event` and `delete_event` report `NotFound` for unknown ids.
//! - Stored events keep insertion order; listings never reorder.

use crate::model::event::{Event, EventDraft, EventId, EventValidationError};
use chrono::NaiveDate;
use log::info;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for event mutations and seed loading.
#[derive(Debug)]
pub enum StoreError {
    Validation(EventValidationError),
    NotFound(EventId),
    DuplicateId(EventId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "event not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate event id: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<EventValidationError> for StoreError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for event CRUD and day lookups.
///
/// Mutations are synchronous and atomic: either the full change lands or an
/// error is returned with the collection untouched.
pub trait EventStore {
    /// Validates the draft and inserts it under a fresh unique id.
    fn create_event(&mut self, draft: &EventDraft) -> StoreResult<EventId>;
    /// Validates the draft and replaces every field except `id`.
    fn update_event(&mut self, id: EventId, draft: &EventDraft) -> StoreResult<()>;
    /// Removes exactly the event with the given id.
    fn delete_event(&mut self, id: EventId) -> StoreResult<()>;
    /// Looks up one event by id.
    fn get_event(&self, id: EventId) -> Option<Event>;
    /// All events in insertion order.
    fn list_events(&self) -> Vec<Event>;
    /// Events whose date equals `date` exactly, in insertion order.
    fn events_on(&self, date: NaiveDate) -> Vec<Event>;
}

/// In-memory event store backing a single app session.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: Vec<Event>,
}

impl MemoryEventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with snapshot events.
    ///
    /// Every record is re-validated on the way in, and duplicate ids are
    /// rejected instead of being masked.
    pub fn with_events(events: Vec<Event>) -> StoreResult<Self> {
        let mut seen: HashSet<EventId> = HashSet::with_capacity(events.len());
        for event in &events {
            EventDraft::from_event(event).validate()?;
            if !seen.insert(event.id) {
                return Err(StoreError::DuplicateId(event.id));
            }
        }
        Ok(Self { events })
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }
}

impl EventStore for MemoryEventStore {
    fn create_event(&mut self, draft: &EventDraft) -> StoreResult<EventId> {
        let event = draft.to_event(Uuid::new_v4())?;
        let id = event.id;
        let date = event.date;
        self.events.push(event);
        info!("event=event_created module=event_store status=ok id={id} date={date}");
        Ok(id)
    }

    fn update_event(&mut self, id: EventId, draft: &EventDraft) -> StoreResult<()> {
        let event = draft.to_event(id)?;
        let position = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.events[position] = event;
        info!("event=event_updated module=event_store status=ok id={id}");
        Ok(())
    }

    fn delete_event(&mut self, id: EventId) -> StoreResult<()> {
        let position = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.events.remove(position);
        info!("event=event_deleted module=event_store status=ok id={id}");
        Ok(())
    }

    fn get_event(&self, id: EventId) -> Option<Event> {
        self.events.iter().find(|event| event.id == id).cloned()
    }

    fn list_events(&self) -> Vec<Event> {
        self.events.clone()
    }

    fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.date == date)
            .cloned()
            .collect()
    }
}
