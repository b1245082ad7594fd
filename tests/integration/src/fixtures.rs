//! Test fixtures
//!
//! Builds a fully wired [`ServiceContext`] over the in-memory stores,
//! with handles kept to the pieces tests need to seed directly (users,
//! blog membership).

use std::sync::Arc;

use forum_common::ForumConfig;
use forum_core::{EntityId, IdGenerator, RateableRegistry, TargetKind};
use forum_service::{
    BlogService, CreateBlogRequest, CreatePostRequest, PostResponse, PostService, RatingService,
    ServiceContext, SubscriptionService,
};
use forum_store::{
    MemoryBlogRepository, MemoryBlogRoster, MemoryFollowStore, MemoryIdentityProvider,
    MemoryPostRepository, MemoryRatingLedger,
};

/// A complete in-memory deployment of the forum core
pub struct TestEnv {
    pub ctx: ServiceContext,
    identity: Arc<MemoryIdentityProvider>,
    roster: Arc<MemoryBlogRoster>,
    ids: Arc<IdGenerator>,
}

impl TestEnv {
    /// Wire up all stores with every entity kind registered as rateable
    pub fn new() -> Self {
        Self::with_config(ForumConfig::default())
    }

    /// Same wiring, custom limits
    pub fn with_config(config: ForumConfig) -> Self {
        Self::build(
            config,
            RateableRegistry::with_kinds([
                TargetKind::Blog,
                TargetKind::Post,
                TargetKind::UserKarma,
            ]),
        )
    }

    /// Wiring with an empty registry: nothing is rateable until a test
    /// registers a kind itself
    pub fn bare() -> Self {
        Self::build(ForumConfig::default(), RateableRegistry::new())
    }

    fn build(config: ForumConfig, registry: RateableRegistry) -> Self {
        let identity = Arc::new(MemoryIdentityProvider::new());
        let roster = Arc::new(MemoryBlogRoster::new());
        let ids = Arc::new(IdGenerator::new());

        let ctx = ServiceContext::builder()
            .post_repo(Arc::new(MemoryPostRepository::new()))
            .blog_repo(Arc::new(MemoryBlogRepository::new()))
            .ledger(Arc::new(MemoryRatingLedger::new()))
            .subscriptions(Arc::new(MemoryFollowStore::new()))
            .stars(Arc::new(MemoryFollowStore::new()))
            .membership(roster.clone())
            .identity(identity.clone())
            .registry(Arc::new(registry))
            .ids(ids.clone())
            .config(config)
            .build()
            .expect("all dependencies provided");

        Self {
            ctx,
            identity,
            roster,
            ids,
        }
    }

    /// Register a fresh user and return its id
    pub fn new_user(&self) -> EntityId {
        let id = self.ids.generate();
        self.identity.register_user(id);
        id
    }

    /// Record blog membership directly in the roster
    pub fn add_blog_member(&self, blog_id: EntityId, user_id: EntityId) {
        self.roster.add_member(blog_id, user_id);
    }

    pub fn posts(&self) -> PostService<'_> {
        PostService::new(&self.ctx)
    }

    pub fn blogs(&self) -> BlogService<'_> {
        BlogService::new(&self.ctx)
    }

    pub fn ratings(&self) -> RatingService<'_> {
        RatingService::new(&self.ctx)
    }

    pub fn subscriptions(&self) -> SubscriptionService<'_> {
        SubscriptionService::new(&self.ctx)
    }

    /// Create a plain simple post and return the response
    pub async fn simple_post(&self, author_id: EntityId, title: &str) -> PostResponse {
        self.posts()
            .create_post(author_id, simple_post_request(title, "some body text"))
            .await
            .expect("simple post should be accepted")
    }

    /// Create a blog owned by a fresh user; the owner joins the roster
    pub async fn blog_with_owner(&self) -> (EntityId, EntityId) {
        let owner = self.new_user();
        let blog = self
            .blogs()
            .create_blog(
                owner,
                CreateBlogRequest {
                    name: "test blog".to_string(),
                    description: "fixture blog".to_string(),
                },
            )
            .await
            .expect("blog creation should succeed");
        self.add_blog_member(blog.id, owner);
        (blog.id, owner)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Request for a simple post with the given title and body
pub fn simple_post_request(title: &str, text: &str) -> CreatePostRequest {
    CreatePostRequest {
        kind: forum_core::PostKind::Simple,
        title: title.to_string(),
        text: Some(text.to_string()),
        addition: None,
        answers: Vec::new(),
        blog: None,
    }
}

/// Request for a link post
pub fn link_post_request(title: &str, url: &str) -> CreatePostRequest {
    CreatePostRequest {
        kind: forum_core::PostKind::Link,
        title: title.to_string(),
        text: None,
        addition: Some(url.to_string()),
        answers: Vec::new(),
        blog: None,
    }
}

/// Request for a poll post with the given answer texts
pub fn poll_post_request(title: &str, answers: &[&str]) -> CreatePostRequest {
    CreatePostRequest {
        kind: forum_core::PostKind::Poll,
        title: title.to_string(),
        text: None,
        addition: None,
        answers: answers.iter().map(|s| (*s).to_string()).collect(),
        blog: None,
    }
}
