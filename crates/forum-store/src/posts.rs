//! In-memory implementation of PostRepository
//!
//! A post owns its answer options, so inserting the `Post` value is the
//! single atomic unit the content pipeline needs: a poll is never
//! visible without its answers.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use forum_core::entities::Post;
use forum_core::error::DomainError;
use forum_core::traits::{PostRepository, RepoResult};
use forum_core::value_objects::EntityId;

/// In-memory implementation of PostRepository
#[derive(Default)]
pub struct MemoryPostRepository {
    posts: DashMap<EntityId, Post>,
}

impl MemoryPostRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Post>> {
        Ok(self.posts.get(&id).map(|entry| entry.clone()))
    }

    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self.posts.contains_key(&id))
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        match self.posts.entry(post.id) {
            Entry::Vacant(slot) => {
                slot.insert(post.clone());
                Ok(())
            }
            Entry::Occupied(_) => Err(DomainError::Storage(format!(
                "post id collision: {}",
                post.id
            ))),
        }
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        match self.posts.get_mut(&post.id) {
            Some(mut entry) => {
                *entry = post.clone();
                Ok(())
            }
            None => Err(DomainError::PostNotFound(post.id)),
        }
    }
}
