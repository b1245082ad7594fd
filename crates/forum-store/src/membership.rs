//! In-memory blog membership roster
//!
//! Membership is a fact owned by the excluded application layer; this
//! roster is the stand-in collaborator the core checks against.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;

use forum_core::traits::{BlogMembership, RepoResult};
use forum_core::value_objects::EntityId;

/// In-memory implementation of BlogMembership
#[derive(Default)]
pub struct MemoryBlogRoster {
    members: DashMap<EntityId, HashSet<EntityId>>,
}

impl MemoryBlogRoster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the user as a member of the blog
    pub fn add_member(&self, blog_id: EntityId, user_id: EntityId) {
        self.members.entry(blog_id).or_default().insert(user_id);
    }
}

#[async_trait]
impl BlogMembership for MemoryBlogRoster {
    async fn is_member(&self, blog_id: EntityId, user_id: EntityId) -> RepoResult<bool> {
        Ok(self
            .members
            .get(&blog_id)
            .is_some_and(|set| set.contains(&user_id)))
    }
}
