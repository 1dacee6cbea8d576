//! Calendar view orchestration: navigation plus the detail/edit flow.
//!
//! # Responsibility
//! - Own the anchor month and resolve Previous/Next/Today navigation.
//! - Drive the Idle/Viewing/Editing flow above the event store.
//!
//! # Invariants
//! - Navigation never touches the store; it only repositions the window.
//! - A failed draft submit stays in `Editing` with the draft intact.
//! - Deleting the viewed event always clears the selection.
//! - An open draft is never silently discarded by another transition.
//! - Transition logs carry ids and modes only; event text never reaches them.

use crate::calendar::grid::{month_grid, AnchorMonth, DayCell};
use crate::clock::Clock;
use crate::model::event::{Event, EventDraft, EventId};
use crate::store::event_store::{EventStore, StoreError};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Month navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    Today,
}

/// Detail/edit flow state.
///
/// `Editing` covers both the add form (`editing: None`) and the edit form
/// for an existing record (`editing: Some(id)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailFlow {
    /// Nothing selected, no form open.
    Idle,
    /// Detail panel open for one stored event.
    Viewing(Event),
    /// Form open over a draft.
    Editing {
        draft: EventDraft,
        editing: Option<EventId>,
    },
}

/// Errors from calendar view operations.
#[derive(Debug)]
pub enum CalendarViewError {
    /// Target event does not exist in the store.
    EventNotFound(EventId),
    /// Operation needs an open detail panel.
    NoEventSelected,
    /// Operation needs an open draft form.
    NoDraftOpen,
    /// A draft form is already open and would be clobbered.
    EditInProgress,
    /// Store-level failure.
    Store(StoreError),
}

impl Display for CalendarViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::NoEventSelected => write!(f, "no event detail is open"),
            Self::NoDraftOpen => write!(f, "no event draft is open"),
            Self::EditInProgress => write!(f, "an event draft is already open"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CalendarViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CalendarViewError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::EventNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Calendar surface state: anchor month, flow and the backing store.
pub struct CalendarView<S: EventStore, C: Clock> {
    store: S,
    clock: C,
    anchor: AnchorMonth,
    flow: DetailFlow,
}

impl<S: EventStore, C: Clock> CalendarView<S, C> {
    /// Opens the calendar on the month containing today.
    pub fn new(store: S, clock: C) -> Self {
        let anchor = AnchorMonth::from_date(clock.today());
        Self {
            store,
            clock,
            anchor,
            flow: DetailFlow::Idle,
        }
    }

    pub fn anchor(&self) -> AnchorMonth {
        self.anchor
    }

    pub fn flow(&self) -> &DetailFlow {
        &self.flow
    }

    /// Read access to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Grid for the current anchor month, recomputed on every call.
    pub fn grid(&self) -> Vec<DayCell> {
        month_grid(self.anchor)
    }

    /// Events scheduled on `date`, in store order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.store.events_on(date)
    }

    /// Moves the anchor month and returns the new anchor.
    ///
    /// The store and the detail flow are untouched; a dialog stays open
    /// while the month underneath changes.
    pub fn navigate(&mut self, direction: Navigation) -> AnchorMonth {
        self.anchor = match direction {
            Navigation::Previous => self.anchor.prev(),
            Navigation::Next => self.anchor.next(),
            Navigation::Today => AnchorMonth::from_date(self.clock.today()),
        };
        self.anchor
    }

    /// Event shown in the detail panel, when one is open.
    pub fn selected_event(&self) -> Option<&Event> {
        match &self.flow {
            DetailFlow::Viewing(event) => Some(event),
            _ => None,
        }
    }

    /// Draft of the open form, when one is open.
    pub fn draft(&self) -> Option<&EventDraft> {
        match &self.flow {
            DetailFlow::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Mutable draft access for form input binding.
    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match &mut self.flow {
            DetailFlow::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Opens the detail panel for one stored event.
    ///
    /// Re-selecting while another detail is open is allowed; selecting while
    /// a draft form is open is not.
    pub fn select_event(&mut self, id: EventId) -> Result<(), CalendarViewError> {
        if matches!(self.flow, DetailFlow::Editing { .. }) {
            return Err(CalendarViewError::EditInProgress);
        }
        let event = self
            .store
            .get_event(id)
            .ok_or(CalendarViewError::EventNotFound(id))?;
        self.flow = DetailFlow::Viewing(event);
        info!("event=detail_opened module=calendar_view status=ok event_id={id}");
        Ok(())
    }

    /// Closes the detail panel. No-op unless one is open.
    pub fn close_detail(&mut self) {
        if matches!(self.flow, DetailFlow::Viewing(_)) {
            self.flow = DetailFlow::Idle;
            info!("event=detail_closed module=calendar_view status=ok");
        }
    }

    /// Opens the add form with a blank draft dated today.
    ///
    /// Allowed from `Idle` and from `Viewing` (which it closes); rejected
    /// while another draft is open.
    pub fn begin_add(&mut self) -> Result<(), CalendarViewError> {
        if matches!(self.flow, DetailFlow::Editing { .. }) {
            return Err(CalendarViewError::EditInProgress);
        }
        self.flow = DetailFlow::Editing {
            draft: EventDraft::blank(self.clock.today()),
            editing: None,
        };
        info!("event=draft_opened module=calendar_view status=ok mode=add");
        Ok(())
    }

    /// Opens the edit form pre-filled from the viewed event.
    pub fn begin_edit(&mut self) -> Result<(), CalendarViewError> {
        let (draft, id) = match &self.flow {
            DetailFlow::Viewing(event) => (EventDraft::from_event(event), event.id),
            _ => return Err(CalendarViewError::NoEventSelected),
        };
        self.flow = DetailFlow::Editing {
            draft,
            editing: Some(id),
        };
        info!("event=draft_opened module=calendar_view status=ok mode=edit event_id={id}");
        Ok(())
    }

    /// Discards the open draft and returns to `Idle`. No-op otherwise.
    pub fn cancel_edit(&mut self) {
        if matches!(self.flow, DetailFlow::Editing { .. }) {
            self.flow = DetailFlow::Idle;
            info!("event=draft_cancelled module=calendar_view status=ok");
        }
    }

    /// Commits the open draft to the store.
    ///
    /// Creates under a fresh id or updates the record being edited, then
    /// returns to `Idle`. On any error the flow stays in `Editing` with the
    /// draft intact, so the form can surface the problem and retry.
    pub fn submit_draft(&mut self) -> Result<EventId, CalendarViewError> {
        let (draft, editing) = match &self.flow {
            DetailFlow::Editing { draft, editing } => (draft, *editing),
            _ => return Err(CalendarViewError::NoDraftOpen),
        };
        let mode = if editing.is_some() { "edit" } else { "add" };

        let committed = match editing {
            Some(id) => self.store.update_event(id, draft).map(|_| id),
            None => self.store.create_event(draft),
        };
        let id = match committed {
            Ok(id) => id,
            Err(err) => {
                warn!("event=draft_submitted module=calendar_view status=error mode={mode}");
                return Err(err.into());
            }
        };

        self.flow = DetailFlow::Idle;
        info!("event=draft_submitted module=calendar_view status=ok mode={mode} event_id={id}");
        Ok(id)
    }

    /// Deletes the viewed event, clears the selection and returns the
    /// removed record.
    pub fn delete_selected(&mut self) -> Result<Event, CalendarViewError> {
        let event = match &self.flow {
            DetailFlow::Viewing(event) => event.clone(),
            _ => return Err(CalendarViewError::NoEventSelected),
        };
        self.store.delete_event(event.id)?;
        self.flow = DetailFlow::Idle;
        info!(
            "event=detail_deleted module=calendar_view status=ok event_id={}",
            event.id
        );
        Ok(event)
    }
}
