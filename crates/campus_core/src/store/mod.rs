//! Storage layer for session-local mutable collections.
//!
//! # Responsibility
//! - Define use-case oriented store contracts.
//! - Keep collection bookkeeping out of flow orchestration code.
//!
//! # Invariants
//! - Store writes validate domain rules before mutating anything.
//! - Store APIs return semantic errors (`NotFound`) for unknown targets.

pub mod event_store;
