//! In-memory implementation of FollowRepository
//!
//! Backs both the subscription and the star relation. The map entry API
//! makes insert-if-absent atomic, so two concurrent subscribes for the
//! same pair cannot both report success.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use forum_core::entities::Subscription;
use forum_core::traits::{FollowRepository, RepoResult};
use forum_core::value_objects::EntityId;

/// In-memory implementation of FollowRepository
#[derive(Default)]
pub struct MemoryFollowStore {
    pairs: DashMap<(EntityId, EntityId), DateTime<Utc>>,
}

impl MemoryFollowStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FollowRepository for MemoryFollowStore {
    async fn insert(&self, user_id: EntityId, post_id: EntityId) -> RepoResult<bool> {
        match self.pairs.entry((user_id, post_id)) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(Utc::now());
                Ok(true)
            }
        }
    }

    async fn remove(&self, user_id: EntityId, post_id: EntityId) -> RepoResult<bool> {
        Ok(self.pairs.remove(&(user_id, post_id)).is_some())
    }

    async fn contains(&self, user_id: EntityId, post_id: EntityId) -> RepoResult<bool> {
        Ok(self.pairs.contains_key(&(user_id, post_id)))
    }

    async fn list_for_user(&self, user_id: EntityId) -> RepoResult<Vec<Subscription>> {
        let mut relations: Vec<Subscription> = self
            .pairs
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .map(|entry| Subscription {
                user_id,
                post_id: entry.key().1,
                created_at: *entry.value(),
            })
            .collect();
        relations.sort_by_key(|s| s.created_at);
        Ok(relations)
    }
}
