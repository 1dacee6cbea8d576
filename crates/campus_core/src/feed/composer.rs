//! Create-post form state and validation.
//!
//! # Responsibility
//! - Hold the form fields for all three post kinds at once.
//! - Validate and package a submission for the outbox.
//!
//! # Invariants
//! - Switching kinds never drops what was typed under another kind.
//! - A submission carries exactly one body matching its kind.
//! - The form resets only after a successful submit.

use crate::feed::Outbox;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Hard cap on post title length, in characters.
pub const POST_TITLE_MAX_CHARS: usize = 300;

/// Which body the post carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostKind {
    #[default]
    Text,
    Image,
    Link,
}

/// Validated post body, one variant per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostBody {
    Text(String),
    Image(String),
    Link(String),
}

impl PostBody {
    /// Stable lowercase label for diagnostics.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Link(_) => "link",
        }
    }
}

/// Validated submission handed to the outbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSubmission {
    pub title: String,
    pub community_slug: String,
    pub body: PostBody,
}

/// Validation failures for the create-post form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostComposerError {
    /// Title is empty after trimming.
    BlankTitle,
    /// Title exceeds the character cap.
    TitleTooLong { length: usize, max: usize },
    /// No community selected.
    MissingCommunity,
    /// Text post without content.
    BlankContent,
    /// Image post without an image URL.
    BlankImageUrl,
    /// Link post without a link URL.
    BlankLinkUrl,
}

impl Display for PostComposerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "post title must not be blank"),
            Self::TitleTooLong { length, max } => {
                write!(f, "post title has {length} characters, maximum is {max}")
            }
            Self::MissingCommunity => write!(f, "a community must be selected"),
            Self::BlankContent => write!(f, "text posts need content"),
            Self::BlankImageUrl => write!(f, "image posts need an image url"),
            Self::BlankLinkUrl => write!(f, "link posts need a link url"),
        }
    }
}

impl Error for PostComposerError {}

/// Create-post form state.
///
/// Shells bind inputs straight to these fields. Each kind keeps its own
/// body field so switching tabs preserves partial input.
#[derive(Debug, Clone, Default)]
pub struct PostComposer {
    pub title: String,
    pub community_slug: Option<String>,
    pub kind: PostKind,
    pub content: String,
    pub image_url: String,
    pub link_url: String,
}

impl PostComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the form and builds the submission it would send.
    ///
    /// Checks run in form order: title, community, then the body field of
    /// the active kind. The first failure is returned.
    pub fn submission(&self) -> Result<PostSubmission, PostComposerError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PostComposerError::BlankTitle);
        }
        let length = title.chars().count();
        if length > POST_TITLE_MAX_CHARS {
            return Err(PostComposerError::TitleTooLong {
                length,
                max: POST_TITLE_MAX_CHARS,
            });
        }

        let community_slug = self
            .community_slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .ok_or(PostComposerError::MissingCommunity)?;

        let body = match self.kind {
            PostKind::Text => {
                let content = self.content.trim();
                if content.is_empty() {
                    return Err(PostComposerError::BlankContent);
                }
                PostBody::Text(content.to_string())
            }
            PostKind::Image => {
                let url = self.image_url.trim();
                if url.is_empty() {
                    return Err(PostComposerError::BlankImageUrl);
                }
                PostBody::Image(url.to_string())
            }
            PostKind::Link => {
                let url = self.link_url.trim();
                if url.is_empty() {
                    return Err(PostComposerError::BlankLinkUrl);
                }
                PostBody::Link(url.to_string())
            }
        };

        Ok(PostSubmission {
            title: title.to_string(),
            community_slug: community_slug.to_string(),
            body,
        })
    }

    /// Sends the form through the outbox and resets it.
    ///
    /// On a validation error the form is left exactly as entered.
    pub fn submit<O: Outbox>(&mut self, outbox: &mut O) -> Result<(), PostComposerError> {
        let submission = self.submission()?;
        outbox.submit_post(&submission);
        *self = Self::default();
        Ok(())
    }
}
