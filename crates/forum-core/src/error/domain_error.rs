//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{EntityId, RateableTarget};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(EntityId),

    #[error("Blog not found: {0}")]
    BlogNotFound(EntityId),

    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("Unknown rateable target: {0}")]
    UnknownRateableTarget(RateableTarget),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid vote value: {0} (expected +1 or -1)")]
    InvalidVoteValue(i64),

    #[error("Invalid {field}: {reason}")]
    ContentValidation { field: &'static str, reason: String },

    #[error("Duplicate answer option: {0:?}")]
    DuplicateAnswerOption(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("User {user_id} is not a member of blog {blog_id}")]
    NotBlogMember {
        blog_id: EntityId,
        user_id: EntityId,
    },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User {user_id} is already subscribed to post {post_id}")]
    AlreadySubscribed {
        user_id: EntityId,
        post_id: EntityId,
    },

    #[error("User {user_id} is not subscribed to post {post_id}")]
    NotSubscribed {
        user_id: EntityId,
        post_id: EntityId,
    },

    #[error("User {user_id} has already starred post {post_id}")]
    AlreadyStarred {
        user_id: EntityId,
        post_id: EntityId,
    },

    #[error("User {user_id} has not starred post {post_id}")]
    NotStarred {
        user_id: EntityId,
        post_id: EntityId,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::BlogNotFound(_) => "UNKNOWN_BLOG",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::UnknownRateableTarget(_) => "UNKNOWN_RATEABLE_TARGET",

            // Validation
            Self::InvalidVoteValue(_) => "INVALID_VOTE_VALUE",
            Self::ContentValidation { .. } => "CONTENT_VALIDATION_ERROR",
            Self::DuplicateAnswerOption(_) => "DUPLICATE_ANSWER_OPTION",

            // Authorization
            Self::NotBlogMember { .. } => "NOT_BLOG_MEMBER",

            // Conflict
            Self::AlreadySubscribed { .. } => "ALREADY_SUBSCRIBED",
            Self::NotSubscribed { .. } => "NOT_SUBSCRIBED",
            Self::AlreadyStarred { .. } => "ALREADY_STARRED",
            Self::NotStarred { .. } => "NOT_STARRED",

            // Infrastructure
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_)
                | Self::BlogNotFound(_)
                | Self::UserNotFound(_)
                | Self::UnknownRateableTarget(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidVoteValue(_)
                | Self::ContentValidation { .. }
                | Self::DuplicateAnswerOption(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotBlogMember { .. })
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadySubscribed { .. }
                | Self::NotSubscribed { .. }
                | Self::AlreadyStarred { .. }
                | Self::NotStarred { .. }
        )
    }
}
