//! Subscription entity - a user following a post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::EntityId;

/// Binary following relation between a user and a post
///
/// Existence is the whole state: a (user, post) pair either has exactly
/// one subscription or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub user_id: EntityId,
    pub post_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Create a new Subscription
    pub fn new(user_id: EntityId, post_id: EntityId) -> Self {
        Self {
            user_id,
            post_id,
            created_at: Utc::now(),
        }
    }
}
