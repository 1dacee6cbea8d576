//! Comment thread state for one post's discussion.
//!
//! # Responsibility
//! - Mirror the snapshot comment tree with per-node interaction state.
//! - Drive the post-level comment box and per-node reply composers.
//!
//! # Invariants
//! - Tree shape and ordering come from the snapshot and never change.
//! - Every node votes independently; traversal is depth-first.
//! - Reply drafts survive closing the composer and clear only on submit.

use crate::feed::Outbox;
use crate::model::post::{Comment, CommentId, PostId};
use crate::model::vote::{VoteDirection, VoteState};

/// One comment in the thread, with its replies nested below it.
///
/// The wrapped record's `replies` are drained into child nodes on
/// construction; reply content lives only in `replies` here.
#[derive(Debug, Clone)]
pub struct ThreadNode {
    pub comment: Comment,
    pub replies: Vec<ThreadNode>,
    vote: VoteState,
    replying: bool,
    reply_text: String,
}

impl ThreadNode {
    fn from_comment(mut comment: Comment) -> Self {
        let children = std::mem::take(&mut comment.replies);
        let vote = VoteState::from_tallies(comment.upvotes, comment.downvotes);
        Self {
            comment,
            replies: children.into_iter().map(Self::from_comment).collect(),
            vote,
            replying: false,
            reply_text: String::new(),
        }
    }

    pub fn vote_state(&self) -> VoteState {
        self.vote
    }

    /// Whether this node's reply composer is open.
    pub fn is_replying(&self) -> bool {
        self.replying
    }

    /// Current reply draft text, kept even while the composer is closed.
    pub fn reply_text(&self) -> &str {
        &self.reply_text
    }
}

/// Discussion state under one post.
#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    nodes: Vec<ThreadNode>,
    composer: String,
}

impl CommentThread {
    /// Builds the thread from snapshot comments, preserving their order.
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            nodes: comments.into_iter().map(ThreadNode::from_comment).collect(),
            composer: String::new(),
        }
    }

    /// Top-level nodes in snapshot order.
    pub fn nodes(&self) -> &[ThreadNode] {
        &self.nodes
    }

    /// Total node count across all depths.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first lookup of one node by comment id.
    pub fn find(&self, id: CommentId) -> Option<&ThreadNode> {
        fn go(nodes: &[ThreadNode], id: CommentId) -> Option<&ThreadNode> {
            for node in nodes {
                if node.comment.id == id {
                    return Some(node);
                }
                if let Some(found) = go(&node.replies, id) {
                    return Some(found);
                }
            }
            None
        }
        go(&self.nodes, id)
    }

    /// Depth-first visit of every node with its nesting depth.
    pub fn walk<F: FnMut(&ThreadNode, usize)>(&self, mut visit: F) {
        fn go<F: FnMut(&ThreadNode, usize)>(nodes: &[ThreadNode], depth: usize, visit: &mut F) {
            for node in nodes {
                visit(node, depth);
                go(&node.replies, depth + 1, visit);
            }
        }
        go(&self.nodes, 0, &mut visit);
    }

    /// Routes one vote press to the node with the given id.
    ///
    /// Returns the node's updated state, or `None` for an unknown id.
    pub fn vote(&mut self, id: CommentId, direction: VoteDirection) -> Option<VoteState> {
        self.find_mut(id).map(|node| node.vote.vote(direction))
    }

    /// Opens or closes one node's reply composer and returns the new state.
    ///
    /// Closing keeps the draft text; only a successful submit clears it.
    pub fn toggle_reply(&mut self, id: CommentId) -> Option<bool> {
        self.find_mut(id).map(|node| {
            node.replying = !node.replying;
            node.replying
        })
    }

    /// Replaces one node's reply draft. Returns `false` for an unknown id.
    pub fn set_reply_text(&mut self, id: CommentId, text: impl Into<String>) -> bool {
        match self.find_mut(id) {
            Some(node) => {
                node.reply_text = text.into();
                true
            }
            None => false,
        }
    }

    /// Submits one node's reply draft through the outbox.
    ///
    /// Returns `Some(true)` when the trimmed draft was sent (the draft
    /// clears and the composer closes), `Some(false)` when the draft was
    /// blank (nothing happens), and `None` for an unknown id.
    pub fn submit_reply<O: Outbox>(&mut self, id: CommentId, outbox: &mut O) -> Option<bool> {
        let node = self.find_mut(id)?;
        let trimmed = node.reply_text.trim();
        if trimmed.is_empty() {
            return Some(false);
        }
        outbox.submit_reply(id, trimmed);
        node.reply_text.clear();
        node.replying = false;
        Some(true)
    }

    /// Current text of the post-level comment box.
    pub fn comment_text(&self) -> &str {
        &self.composer
    }

    /// Replaces the post-level comment box text.
    pub fn set_comment_text(&mut self, text: impl Into<String>) {
        self.composer = text.into();
    }

    /// Submits the post-level comment box through the outbox.
    ///
    /// Returns `true` when the trimmed text was sent and the box cleared;
    /// a blank box is a silent no-op returning `false`.
    pub fn submit_comment<O: Outbox>(&mut self, post_id: PostId, outbox: &mut O) -> bool {
        let trimmed = self.composer.trim();
        if trimmed.is_empty() {
            return false;
        }
        outbox.submit_comment(post_id, trimmed);
        self.composer.clear();
        true
    }

    fn find_mut(&mut self, id: CommentId) -> Option<&mut ThreadNode> {
        fn go(nodes: &mut [ThreadNode], id: CommentId) -> Option<&mut ThreadNode> {
            for node in nodes {
                if node.comment.id == id {
                    return Some(node);
                }
                if let Some(found) = go(&mut node.replies, id) {
                    return Some(found);
                }
            }
            None
        }
        go(&mut self.nodes, id)
    }
}
