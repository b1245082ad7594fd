//! In-memory identity provider
//!
//! User accounts live outside the core; karma voting only needs an
//! existence check, which this provider answers.

use async_trait::async_trait;
use dashmap::DashSet;

use forum_core::traits::{IdentityProvider, RepoResult};
use forum_core::value_objects::EntityId;

/// In-memory implementation of IdentityProvider
#[derive(Default)]
pub struct MemoryIdentityProvider {
    users: DashSet<EntityId>,
}

impl MemoryIdentityProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a known user id
    pub fn register_user(&self, user_id: EntityId) {
        self.users.insert(user_id);
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn user_exists(&self, user_id: EntityId) -> RepoResult<bool> {
        Ok(self.users.contains(&user_id))
    }
}
