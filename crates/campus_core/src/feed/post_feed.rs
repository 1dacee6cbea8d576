//! Post feed state and card projections.
//!
//! # Responsibility
//! - Wrap each snapshot post with its own live vote state.
//! - Provide community filtering and the plain-text card preview.
//!
//! # Invariants
//! - Feed order is snapshot order; voting and filtering never reorder.
//! - Each item's vote state moves independently of every other item.

use crate::clock::time_ago;
use crate::model::post::{Community, Post, PostId};
use crate::model::vote::{VoteDirection, VoteState};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const PREVIEW_MAX_CHARS: usize = 140;

/// One feed entry: the immutable post plus its live vote state.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub post: Post,
    vote: VoteState,
}

impl FeedItem {
    /// Wraps a snapshot post, seeding the score from its tallies.
    pub fn new(post: Post) -> Self {
        let vote = VoteState::from_tallies(post.upvotes, post.downvotes);
        Self { post, vote }
    }

    pub fn vote_state(&self) -> VoteState {
        self.vote
    }

    /// Applies one vote press to this item and returns the updated state.
    pub fn vote(&mut self, direction: VoteDirection) -> VoteState {
        self.vote.vote(direction)
    }

    /// Plain-text preview for the card body.
    pub fn preview(&self) -> Option<String> {
        content_preview(&self.post.content)
    }

    /// Relative age label for the card header, e.g. `2 hours ago`.
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        time_ago(self.post.created_at, now)
    }
}

/// Ordered post feed with per-item vote state.
#[derive(Debug, Clone, Default)]
pub struct PostFeed {
    items: Vec<FeedItem>,
}

impl PostFeed {
    /// Builds the feed from snapshot posts, preserving their order.
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            items: posts.into_iter().map(FeedItem::new).collect(),
        }
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up one item by post id.
    pub fn item(&self, id: PostId) -> Option<&FeedItem> {
        self.items.iter().find(|item| item.post.id == id)
    }

    /// Items belonging to one community, in feed order.
    pub fn by_community(&self, slug: &str) -> Vec<&FeedItem> {
        self.items
            .iter()
            .filter(|item| item.post.community_slug == slug)
            .collect()
    }

    /// Routes one vote press to the item with the given id.
    ///
    /// Returns the item's updated state, or `None` for an unknown id.
    pub fn vote(&mut self, id: PostId, direction: VoteDirection) -> Option<VoteState> {
        self.items
            .iter_mut()
            .find(|item| item.post.id == id)
            .map(|item| item.vote(direction))
    }
}

/// Community page state: the metadata record plus the local join flag.
#[derive(Debug, Clone)]
pub struct CommunityPage {
    community: Community,
    joined: bool,
}

impl CommunityPage {
    /// Opens a community page; the viewer starts not joined.
    pub fn new(community: Community) -> Self {
        Self {
            community,
            joined: false,
        }
    }

    pub fn community(&self) -> &Community {
        &self.community
    }

    pub fn joined(&self) -> bool {
        self.joined
    }

    /// Flips membership and returns the new state.
    pub fn toggle_join(&mut self) -> bool {
        self.joined = !self.joined;
        self.joined
    }
}

/// Derives the plain-text card preview from post content.
///
/// Rules:
/// - markdown symbols removed, whitespace collapsed to single spaces.
/// - first 140 chars retained.
/// - `None` when nothing printable remains.
pub fn content_preview(content: &str) -> Option<String> {
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(content, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}
