//! Subscription service
//!
//! Two follow relations with identical mechanics: subscriptions (follow
//! a post's comment activity) and stars (bookmark a post). Both are
//! strict about state: adding an existing pair or removing a missing
//! one is an error, never a silent no-op. The read-only checks never
//! fail; absence is a plain `false`.

use tracing::{info, instrument};

use forum_core::{DomainError, EntityId};

use crate::dto::SubscriptionResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Subscription service
pub struct SubscriptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubscriptionService<'a> {
    /// Create a new SubscriptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Subscribe a user to a post
    ///
    /// # Errors
    /// Returns `AlreadySubscribed` if the pair already exists.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, user_id: EntityId, post_id: EntityId) -> ServiceResult<()> {
        if !self.ctx.subscriptions().insert(user_id, post_id).await? {
            return Err(DomainError::AlreadySubscribed { user_id, post_id }.into());
        }
        info!(%user_id, %post_id, "subscribed");
        Ok(())
    }

    /// Remove a user's subscription to a post
    ///
    /// # Errors
    /// Returns `NotSubscribed` if no such pair exists.
    #[instrument(skip(self))]
    pub async fn unsubscribe(&self, user_id: EntityId, post_id: EntityId) -> ServiceResult<()> {
        if !self.ctx.subscriptions().remove(user_id, post_id).await? {
            return Err(DomainError::NotSubscribed { user_id, post_id }.into());
        }
        info!(%user_id, %post_id, "unsubscribed");
        Ok(())
    }

    /// Check whether a user is subscribed to a post
    ///
    /// A total query: unknown users and posts simply yield `false`.
    #[instrument(skip(self))]
    pub async fn is_subscribed(&self, user_id: EntityId, post_id: EntityId) -> ServiceResult<bool> {
        Ok(self.ctx.subscriptions().contains(user_id, post_id).await?)
    }

    /// List a user's subscriptions, oldest first
    #[instrument(skip(self))]
    pub async fn subscriptions(&self, user_id: EntityId) -> ServiceResult<Vec<SubscriptionResponse>> {
        let entries = self.ctx.subscriptions().list_for_user(user_id).await?;
        Ok(entries.iter().map(Into::into).collect())
    }

    /// Star (bookmark) a post for a user
    ///
    /// # Errors
    /// Returns `AlreadyStarred` if the pair already exists.
    #[instrument(skip(self))]
    pub async fn star(&self, user_id: EntityId, post_id: EntityId) -> ServiceResult<()> {
        if !self.ctx.stars().insert(user_id, post_id).await? {
            return Err(DomainError::AlreadyStarred { user_id, post_id }.into());
        }
        info!(%user_id, %post_id, "starred");
        Ok(())
    }

    /// Remove a user's star from a post
    ///
    /// # Errors
    /// Returns `NotStarred` if no such pair exists.
    #[instrument(skip(self))]
    pub async fn unstar(&self, user_id: EntityId, post_id: EntityId) -> ServiceResult<()> {
        if !self.ctx.stars().remove(user_id, post_id).await? {
            return Err(DomainError::NotStarred { user_id, post_id }.into());
        }
        info!(%user_id, %post_id, "unstarred");
        Ok(())
    }

    /// Check whether a user has starred a post
    #[instrument(skip(self))]
    pub async fn is_starred(&self, user_id: EntityId, post_id: EntityId) -> ServiceResult<bool> {
        Ok(self.ctx.stars().contains(user_id, post_id).await?)
    }
}
