//! Domain model for feed content, calendar events and vote state.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep immutable snapshot records separate from mutable interaction state.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID-backed alias.
//! - Snapshot tallies never change; live scores live in [`vote::VoteState`].

pub mod event;
pub mod post;
pub mod vote;
