//! Response DTOs returned to the (external) web layer

use chrono::{DateTime, Utc};
use serde::Serialize;

use forum_core::{AnswerOption, Blog, EntityId, Post, PostKind, Subscription};

/// One poll answer option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOptionResponse {
    pub id: EntityId,
    pub text: String,
    pub position: u32,
}

impl From<&AnswerOption> for AnswerOptionResponse {
    fn from(answer: &AnswerOption) -> Self {
        Self {
            id: answer.id,
            text: answer.text.clone(),
            position: answer.position,
        }
    }
}

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: EntityId,
    pub author_id: EntityId,
    pub blog_id: Option<EntityId>,
    pub kind: PostKind,
    pub title: String,
    pub body: Option<String>,
    pub addition: Option<String>,
    pub answers: Vec<AnswerOptionResponse>,
    pub is_draft: bool,
    pub is_commenting_locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            blog_id: post.blog_id,
            kind: post.kind(),
            title: post.title.clone(),
            body: post.content.body().map(str::to_string),
            addition: post.content.url().map(str::to_string),
            answers: post.content.answers().iter().map(Into::into).collect(),
            is_draft: post.is_draft,
            is_commenting_locked: post.is_commenting_locked,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Blog response
#[derive(Debug, Clone, Serialize)]
pub struct BlogResponse {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub owner_id: EntityId,
    pub blog_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            name: blog.name.clone(),
            description: blog.description.clone(),
            owner_id: blog.owner_id,
            blog_type: blog.blog_type.clone(),
            created_at: blog.created_at,
        }
    }
}

/// One entry of a user's subscription list
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub post_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl From<&Subscription> for SubscriptionResponse {
    fn from(subscription: &Subscription) -> Self {
        Self {
            post_id: subscription.post_id,
            created_at: subscription.created_at,
        }
    }
}
