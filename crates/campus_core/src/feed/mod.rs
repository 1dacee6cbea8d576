//! Feed engines: post list, comment threads and submission composers.
//!
//! # Responsibility
//! - Pair immutable content records with their mutable interaction state.
//! - Route vote presses and composer submissions to the right target.
//!
//! # Invariants
//! - Snapshot records are never mutated; interaction state wraps them.
//! - Submissions leave core only through the [`Outbox`] boundary.

use crate::model::post::{CommentId, PostId};
use log::info;

pub mod composer;
pub mod post_feed;
pub mod thread;

pub use composer::PostSubmission;

/// Delivery boundary for user-authored content.
///
/// Composers hand validated text over this seam; what happens next (network,
/// queue, test capture) is the caller's concern.
pub trait Outbox {
    fn submit_post(&mut self, submission: &PostSubmission);
    fn submit_comment(&mut self, post_id: PostId, text: &str);
    fn submit_reply(&mut self, parent_id: CommentId, text: &str);
}

/// Outbox that acknowledges submissions in the diagnostic log.
///
/// Logs metadata only, never the submitted text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOutbox;

impl Outbox for LogOutbox {
    fn submit_post(&mut self, submission: &PostSubmission) {
        info!(
            "event=post_submitted module=feed status=ok community={} kind={} title_chars={}",
            submission.community_slug,
            submission.body.kind_label(),
            submission.title.chars().count()
        );
    }

    fn submit_comment(&mut self, post_id: PostId, text: &str) {
        info!(
            "event=comment_submitted module=feed status=ok post_id={post_id} chars={}",
            text.chars().count()
        );
    }

    fn submit_reply(&mut self, parent_id: CommentId, text: &str) {
        info!(
            "event=reply_submitted module=feed status=ok parent_id={parent_id} chars={}",
            text.chars().count()
        );
    }
}
