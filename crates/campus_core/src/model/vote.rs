//! Tri-state vote engine shared by posts and comments.
//!
//! # Responsibility
//! - Define the vote status lattice (none/up/down) and its transition table.
//! - Keep each displayed score consistent with its owner's vote status.
//!
//! # Invariants
//! - Pressing the active direction retracts it; pressing the opposite
//!   direction swaps in one step.
//! - A swap moves the score by two, a fresh vote or a retraction by one.
//! - `score == initial score + status_offset(status)` after any sequence of
//!   presses.

/// Direction of a single vote press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    Up,
    Down,
}

/// Resolves one vote press against the current status.
///
/// Returns the status after the press and the score delta it carries. The
/// table is total over both inputs; there is no other way to move a score.
pub fn vote_transition(
    current: Option<VoteDirection>,
    requested: VoteDirection,
) -> (Option<VoteDirection>, i64) {
    use VoteDirection::{Down, Up};

    match (current, requested) {
        (None, Up) => (Some(Up), 1),
        (None, Down) => (Some(Down), -1),
        (Some(Up), Up) => (None, -1),
        (Some(Down), Down) => (None, 1),
        (Some(Up), Down) => (Some(Down), -2),
        (Some(Down), Up) => (Some(Up), 2),
    }
}

/// Score contribution of a vote status relative to the initial tally.
pub fn status_offset(status: Option<VoteDirection>) -> i64 {
    match status {
        None => 0,
        Some(VoteDirection::Up) => 1,
        Some(VoteDirection::Down) => -1,
    }
}

/// Per-item vote state: the caller's current vote plus the running score.
///
/// Fields are private so the score can only move through [`VoteState::vote`],
/// which keeps the score/status invariant inductive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteState {
    status: Option<VoteDirection>,
    score: i64,
}

impl VoteState {
    /// Creates a fresh state with no active vote.
    pub fn new(initial_score: i64) -> Self {
        Self {
            status: None,
            score: initial_score,
        }
    }

    /// Seeds the state from separate up/down tallies.
    pub fn from_tallies(upvotes: u32, downvotes: u32) -> Self {
        Self::new(i64::from(upvotes) - i64::from(downvotes))
    }

    /// Current vote of the local caller, if any.
    pub fn status(&self) -> Option<VoteDirection> {
        self.status
    }

    /// Score as it should be displayed right now.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Applies one vote press and returns the updated state.
    pub fn vote(&mut self, requested: VoteDirection) -> VoteState {
        let (status, delta) = vote_transition(self.status, requested);
        self.status = status;
        self.score += delta;
        *self
    }
}
