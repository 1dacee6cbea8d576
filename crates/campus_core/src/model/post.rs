//! Feed content records: posts, comment trees and communities.
//!
//! # Responsibility
//! - Define the immutable content shapes delivered by the content snapshot.
//! - Keep tally fields separate from interaction state; live scores belong to
//!   the vote engine, not to these records.
//!
//! # Invariants
//! - `id` fields are stable and never reused.
//! - `upvotes`/`downvotes` are the snapshot tallies used to seed vote state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for feed posts.
pub type PostId = Uuid;

/// Stable identifier for comments at any nesting depth.
pub type CommentId = Uuid;

/// One feed post as delivered by the content snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub community_name: String,
    pub community_slug: String,
    pub author: String,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
    pub upvotes: u32,
    pub downvotes: u32,
    pub comment_count: u32,
    pub has_image: bool,
}

impl Post {
    /// Net snapshot tally used to seed the vote engine for this post.
    pub fn initial_score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}

/// One comment with its nested replies.
///
/// Replies are ordered; rendering and traversal preserve snapshot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub author_username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub upvotes: u32,
    pub downvotes: u32,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Net snapshot tally used to seed the vote engine for this comment.
    pub fn initial_score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }
}

/// Community metadata shown on cards, sidebars and the community header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Community {
    pub name: String,
    /// URL-safe handle used for filtering and routing.
    pub slug: String,
    pub description: String,
    pub member_count: u32,
}

impl Community {
    /// Member count with thousands grouping, e.g. `1,245 members`.
    pub fn member_count_label(&self) -> String {
        format!("{} members", group_thousands(self.member_count))
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
