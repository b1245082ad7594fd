//! Request DTOs for the service layer
//!
//! Structural constraints live in `Validate` derives; everything that
//! depends on the post kind or on runtime configuration is checked in
//! the services.

use serde::Deserialize;
use validator::Validate;

use forum_core::{EntityId, PostKind};

// ============================================================================
// Blog Requests
// ============================================================================

/// Create blog request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, max = 300, message = "Blog name must be 1-300 characters"))]
    pub name: String,

    #[validate(length(max = 3000, message = "Description must be at most 3000 characters"))]
    pub description: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
///
/// `text`, `addition`, and `answers` are interpreted according to `kind`;
/// fields a kind does not use are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    pub kind: PostKind,

    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    /// Free-text body (required for simple posts)
    pub text: Option<String>,

    /// External URL (required for link and translate posts)
    pub addition: Option<String>,

    /// Answer option texts, in submission order (polls only)
    #[serde(default)]
    pub answers: Vec<String>,

    /// Blog to attach the post to; author must be a member
    pub blog: Option<EntityId>,
}

/// Edit post request
///
/// Only supplied fields are re-validated and applied; the post kind has
/// no representation here and therefore cannot change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditPostRequest {
    pub title: Option<String>,
    pub text: Option<String>,
    pub addition: Option<String>,
    pub is_draft: Option<bool>,
    pub is_commenting_locked: Option<bool>,
}
