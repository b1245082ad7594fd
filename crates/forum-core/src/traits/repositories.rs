//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the storage layer provides the
//! implementation. The in-memory store in `forum-store` is the default
//! backing; anything offering atomic per-key read-modify-write can stand
//! in for it.

use async_trait::async_trait;

use crate::entities::{Blog, Post, Subscription};
use crate::error::DomainError;
use crate::value_objects::{EntityId, RateableTarget, VoteValue, VoterState};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Rating Ledger
// ============================================================================

/// Authoritative vote records and aggregate scores, per target
///
/// The ledger keeps one live vote per (voter, target) pair and the running
/// sum of those votes. Every mutation of one target happens inside a
/// single per-target critical section; different targets never contend.
#[async_trait]
pub trait RatingLedger: Send + Sync {
    /// Apply a vote and return the committed score
    ///
    /// First vote by this voter creates the record. A re-vote with the
    /// same value is an idempotent no-op. A re-vote with the opposite
    /// value flips the record and moves the score by `2 * value`, as one
    /// atomic step.
    async fn cast_vote(
        &self,
        target: RateableTarget,
        voter_id: EntityId,
        value: VoteValue,
    ) -> RepoResult<i64>;

    /// Read the last committed score; a target without votes scores 0
    async fn current_score(&self, target: RateableTarget) -> RepoResult<i64>;

    /// How the given voter currently stands on the target
    async fn voter_state(&self, target: RateableTarget, voter_id: EntityId)
        -> RepoResult<VoterState>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Post>>;

    /// Check whether a post exists
    async fn exists(&self, id: EntityId) -> RepoResult<bool>;

    /// Persist a new post together with its dependent answer options
    ///
    /// The post and its answers become visible as one unit or not at all.
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update an existing post in place
    async fn update(&self, post: &Post) -> RepoResult<()>;
}

// ============================================================================
// Blog Repository
// ============================================================================

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find blog by ID
    async fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Blog>>;

    /// Check whether a blog exists
    async fn exists(&self, id: EntityId) -> RepoResult<bool>;

    /// Persist a new blog
    async fn create(&self, blog: &Blog) -> RepoResult<()>;
}

// ============================================================================
// Follow Repository (subscriptions, stars)
// ============================================================================

/// A binary user↔post relation with atomic pair guards
///
/// Backs both subscriptions and stars. `insert` and `remove` report
/// whether they changed anything, so callers can turn redundant calls
/// into the appropriate conflict error without a separate lookup.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert the pair; returns false if it already existed
    async fn insert(&self, user_id: EntityId, post_id: EntityId) -> RepoResult<bool>;

    /// Remove the pair; returns false if it did not exist
    async fn remove(&self, user_id: EntityId, post_id: EntityId) -> RepoResult<bool>;

    /// Pure lookup, never mutates
    async fn contains(&self, user_id: EntityId, post_id: EntityId) -> RepoResult<bool>;

    /// All relations held by one user, oldest first
    async fn list_for_user(&self, user_id: EntityId) -> RepoResult<Vec<Subscription>>;
}

// ============================================================================
// External Collaborators
// ============================================================================

/// Blog membership facts, owned by the excluded application layer
#[async_trait]
pub trait BlogMembership: Send + Sync {
    /// Check whether the user is a recognized member of the blog
    async fn is_member(&self, blog_id: EntityId, user_id: EntityId) -> RepoResult<bool>;
}

/// Identity provider, owned by the excluded application layer
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Check whether a user with this id exists
    async fn user_exists(&self, user_id: EntityId) -> RepoResult<bool>;
}
