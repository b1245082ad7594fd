//! Blog entity - a named collection posts can attach to

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{EntityId, RateableTarget, TargetKind};

/// Blog entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub owner_id: EntityId,
    /// Taxonomy label; the default comes from explicit configuration
    pub blog_type: String,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new Blog
    pub fn new(
        id: EntityId,
        name: String,
        description: String,
        owner_id: EntityId,
        blog_type: String,
    ) -> Self {
        Self {
            id,
            name,
            description,
            owner_id,
            blog_type,
            created_at: Utc::now(),
        }
    }

    /// The rating address of this blog
    #[inline]
    pub fn rating_target(&self) -> RateableTarget {
        RateableTarget::new(TargetKind::Blog, self.id)
    }
}
