//! Service context - dependency container for services
//!
//! Holds the repositories, the rating ledger and registry, the external
//! collaborator ports, and configuration. Services borrow the context
//! instead of owning dependencies themselves.

use std::sync::Arc;

use forum_common::ForumConfig;
use forum_core::{
    BlogMembership, BlogRepository, FollowRepository, IdGenerator, IdentityProvider,
    PostRepository, RateableRegistry, RatingLedger,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    post_repo: Arc<dyn PostRepository>,
    blog_repo: Arc<dyn BlogRepository>,
    ledger: Arc<dyn RatingLedger>,
    subscriptions: Arc<dyn FollowRepository>,
    stars: Arc<dyn FollowRepository>,
    membership: Arc<dyn BlogMembership>,
    identity: Arc<dyn IdentityProvider>,
    registry: Arc<RateableRegistry>,
    ids: Arc<IdGenerator>,
    config: ForumConfig,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::default()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the blog repository
    pub fn blog_repo(&self) -> &dyn BlogRepository {
        self.blog_repo.as_ref()
    }

    /// Get the rating ledger
    pub fn ledger(&self) -> &dyn RatingLedger {
        self.ledger.as_ref()
    }

    /// Get the subscription relation store
    pub fn subscriptions(&self) -> &dyn FollowRepository {
        self.subscriptions.as_ref()
    }

    /// Get the star relation store
    pub fn stars(&self) -> &dyn FollowRepository {
        self.stars.as_ref()
    }

    /// Get the blog membership collaborator
    pub fn membership(&self) -> &dyn BlogMembership {
        self.membership.as_ref()
    }

    /// Get the identity provider collaborator
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    /// Get the rateable-kind registry
    pub fn registry(&self) -> &RateableRegistry {
        self.registry.as_ref()
    }

    /// Get the forum configuration
    pub fn config(&self) -> &ForumConfig {
        &self.config
    }

    /// Generate a new EntityId
    pub fn generate_id(&self) -> forum_core::EntityId {
        self.ids.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    blog_repo: Option<Arc<dyn BlogRepository>>,
    ledger: Option<Arc<dyn RatingLedger>>,
    subscriptions: Option<Arc<dyn FollowRepository>>,
    stars: Option<Arc<dyn FollowRepository>>,
    membership: Option<Arc<dyn BlogMembership>>,
    identity: Option<Arc<dyn IdentityProvider>>,
    registry: Option<Arc<RateableRegistry>>,
    ids: Option<Arc<IdGenerator>>,
    config: Option<ForumConfig>,
}

impl ServiceContextBuilder {
    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn blog_repo(mut self, repo: Arc<dyn BlogRepository>) -> Self {
        self.blog_repo = Some(repo);
        self
    }

    pub fn ledger(mut self, ledger: Arc<dyn RatingLedger>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn subscriptions(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.subscriptions = Some(repo);
        self
    }

    pub fn stars(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.stars = Some(repo);
        self
    }

    pub fn membership(mut self, membership: Arc<dyn BlogMembership>) -> Self {
        self.membership = Some(membership);
        self
    }

    pub fn identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn registry(mut self, registry: Arc<RateableRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn ids(mut self, ids: Arc<IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn config(mut self, config: ForumConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// The registry, id generator, and config fall back to defaults;
    /// every store and collaborator is required.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            blog_repo: self
                .blog_repo
                .ok_or_else(|| ServiceError::validation("blog_repo is required"))?,
            ledger: self
                .ledger
                .ok_or_else(|| ServiceError::validation("ledger is required"))?,
            subscriptions: self
                .subscriptions
                .ok_or_else(|| ServiceError::validation("subscriptions is required"))?,
            stars: self
                .stars
                .ok_or_else(|| ServiceError::validation("stars is required"))?,
            membership: self
                .membership
                .ok_or_else(|| ServiceError::validation("membership is required"))?,
            identity: self
                .identity
                .ok_or_else(|| ServiceError::validation("identity is required"))?,
            registry: self.registry.unwrap_or_default(),
            ids: self.ids.unwrap_or_default(),
            config: self.config.unwrap_or_default(),
        })
    }
}
