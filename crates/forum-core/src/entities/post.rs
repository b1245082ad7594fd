//! Post entity - the polymorphic content unit
//!
//! One post table, four shapes. The shape is a tagged variant
//! ([`PostContent`]) rather than a class hierarchy: the discriminant
//! ([`PostKind`]) is fixed at creation and never changes afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{EntityId, RateableTarget, TargetKind};

/// Discriminant selecting validation rules and payload shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    Simple,
    Link,
    Translate,
    Poll,
}

impl PostKind {
    /// Stable name used in logs and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Link => "link",
            Self::Translate => "translate",
            Self::Poll => "poll",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable choice belonging to a poll post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: EntityId,
    pub post_id: EntityId,
    pub text: String,
    /// Zero-based submission order
    pub position: u32,
}

impl AnswerOption {
    /// Create a new AnswerOption
    pub fn new(id: EntityId, post_id: EntityId, text: String, position: u32) -> Self {
        Self {
            id,
            post_id,
            text,
            position,
        }
    }
}

/// Kind-dependent payload of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PostContent {
    Simple {
        body: String,
    },
    Link {
        body: Option<String>,
        url: String,
    },
    Translate {
        body: Option<String>,
        url: String,
    },
    Poll {
        /// Owned by the post; persisted together with it as one unit
        answers: Vec<AnswerOption>,
    },
}

impl PostContent {
    /// The discriminant of this payload
    pub fn kind(&self) -> PostKind {
        match self {
            Self::Simple { .. } => PostKind::Simple,
            Self::Link { .. } => PostKind::Link,
            Self::Translate { .. } => PostKind::Translate,
            Self::Poll { .. } => PostKind::Poll,
        }
    }

    /// Free-text body, if this kind carries one
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Simple { body } => Some(body),
            Self::Link { body, .. } | Self::Translate { body, .. } => body.as_deref(),
            Self::Poll { .. } => None,
        }
    }

    /// External URL ("addition"), if this kind carries one
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Link { url, .. } | Self::Translate { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Answer options; empty for every non-poll kind
    pub fn answers(&self) -> &[AnswerOption] {
        match self {
            Self::Poll { answers } => answers,
            _ => &[],
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: EntityId,
    pub author_id: EntityId,
    pub blog_id: Option<EntityId>,
    pub title: String,
    pub content: PostContent,
    pub is_draft: bool,
    pub is_commenting_locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post with the given payload
    pub fn new(
        id: EntityId,
        author_id: EntityId,
        blog_id: Option<EntityId>,
        title: String,
        content: PostContent,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            blog_id,
            title,
            content,
            is_draft: false,
            is_commenting_locked: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The discriminant of this post
    #[inline]
    pub fn kind(&self) -> PostKind {
        self.content.kind()
    }

    /// The rating address of this post
    #[inline]
    pub fn rating_target(&self) -> RateableTarget {
        RateableTarget::new(TargetKind::Post, self.id)
    }

    /// Check whether the post has been edited since creation
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }

    /// Replace the title, bumping the updated timestamp
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    /// Replace the free-text body where the kind carries one
    ///
    /// Poll posts have no body; the call is a no-op for them.
    pub fn set_body(&mut self, new_body: String) {
        match &mut self.content {
            PostContent::Simple { body } => *body = new_body,
            PostContent::Link { body, .. } | PostContent::Translate { body, .. } => {
                *body = Some(new_body);
            }
            PostContent::Poll { .. } => return,
        }
        self.touch();
    }

    /// Replace the external URL where the kind carries one
    pub fn set_url(&mut self, new_url: String) {
        match &mut self.content {
            PostContent::Link { url, .. } | PostContent::Translate { url, .. } => *url = new_url,
            _ => return,
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
