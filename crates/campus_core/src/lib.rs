//! Core domain logic for Campus Connect.
//! This crate is the single source of truth for interaction-state invariants.

pub mod calendar;
pub mod clock;
pub mod feed;
pub mod logging;
pub mod model;
pub mod seed;
pub mod store;

pub use calendar::grid::{month_grid, AnchorMonth, DayCell, WEEKDAY_LABELS};
pub use calendar::view::{CalendarView, CalendarViewError, DetailFlow, Navigation};
pub use clock::{time_ago, Clock, SystemClock};
pub use feed::composer::{
    PostBody, PostComposer, PostComposerError, PostKind, PostSubmission, POST_TITLE_MAX_CHARS,
};
pub use feed::post_feed::{content_preview, CommunityPage, FeedItem, PostFeed};
pub use feed::thread::{CommentThread, ThreadNode};
pub use feed::{LogOutbox, Outbox};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventDraft, EventId, EventValidationError};
pub use model::post::{Comment, CommentId, Community, Post, PostId};
pub use model::vote::{status_offset, vote_transition, VoteDirection, VoteState};
pub use store::event_store::{EventStore, MemoryEventStore, StoreError, StoreResult};

/// Returns the core crate version, for shells to surface in diagnostics.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
