//! In-memory implementation of BlogRepository

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use forum_core::entities::Blog;
use forum_core::error::DomainError;
use forum_core::traits::{BlogRepository, RepoResult};
use forum_core::value_objects::EntityId;

/// In-memory implementation of BlogRepository
#[derive(Default)]
pub struct MemoryBlogRepository {
    blogs: DashMap<EntityId, Blog>,
}

impl MemoryBlogRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for MemoryBlogRepository {
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Blog>> {
        Ok(self.blogs.get(&id).map(|entry| entry.clone()))
    }

    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self.blogs.contains_key(&id))
    }

    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        match self.blogs.entry(blog.id) {
            Entry::Vacant(slot) => {
                slot.insert(blog.clone());
                Ok(())
            }
            Entry::Occupied(_) => Err(DomainError::Storage(format!(
                "blog id collision: {}",
                blog.id
            ))),
        }
    }
}
