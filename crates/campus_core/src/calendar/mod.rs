//! Calendar engine: month grid math and the event detail/edit flow.
//!
//! # Responsibility
//! - Build padded month grids from an anchor month.
//! - Orchestrate navigation and the event dialog lifecycle over the store.
//!
//! # Invariants
//! - Grid construction is pure; only the flow layer mutates anything.

pub mod grid;
pub mod view;
