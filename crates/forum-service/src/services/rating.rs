//! Rating service
//!
//! The capability front door for voting: resolves a (kind, id) pair to
//! its ledger partition, enforcing that the kind opted into rating and
//! that the entity actually exists. Blogs, posts, and user karma all go
//! through the same path; adding a rateable kind means registering it,
//! not duplicating vote logic.

use tracing::{info, instrument};

use forum_core::{DomainError, EntityId, RateableTarget, TargetKind, VoteValue, VoterState};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Rating service
pub struct RatingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RatingService<'a> {
    /// Create a new RatingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Declare an entity kind rateable; idempotent
    pub fn register_kind(&self, kind: TargetKind) {
        self.ctx.registry().register_kind(kind);
    }

    /// Cast a vote and return the committed score
    ///
    /// `raw_value` must be +1 or -1. A repeat of the voter's current
    /// vote is an idempotent success; the opposite value flips the vote.
    #[instrument(skip(self))]
    pub async fn rate(
        &self,
        kind: TargetKind,
        entity_id: EntityId,
        voter_id: EntityId,
        raw_value: i64,
    ) -> ServiceResult<i64> {
        let value = VoteValue::try_from(raw_value)?;
        let target = self.resolve_target(kind, entity_id).await?;

        let score = self.ctx.ledger().cast_vote(target, voter_id, value).await?;

        info!(%target, %voter_id, %value, score, "vote cast");
        Ok(score)
    }

    /// Read the current aggregate score of a target
    #[instrument(skip(self))]
    pub async fn score(&self, kind: TargetKind, entity_id: EntityId) -> ServiceResult<i64> {
        let target = self.resolve_target(kind, entity_id).await?;
        Ok(self.ctx.ledger().current_score(target).await?)
    }

    /// How the given voter currently stands on a target
    #[instrument(skip(self))]
    pub async fn voter_state(
        &self,
        kind: TargetKind,
        entity_id: EntityId,
        voter_id: EntityId,
    ) -> ServiceResult<VoterState> {
        let target = self.resolve_target(kind, entity_id).await?;
        Ok(self.ctx.ledger().voter_state(target, voter_id).await?)
    }

    /// Check registration and entity existence, yielding the ledger address
    async fn resolve_target(
        &self,
        kind: TargetKind,
        entity_id: EntityId,
    ) -> ServiceResult<RateableTarget> {
        let target = RateableTarget::new(kind, entity_id);

        if !self.ctx.registry().is_registered(kind) {
            return Err(DomainError::UnknownRateableTarget(target).into());
        }

        let exists = match kind {
            TargetKind::Post => self.ctx.post_repo().exists(entity_id).await?,
            TargetKind::Blog => self.ctx.blog_repo().exists(entity_id).await?,
            TargetKind::UserKarma => self.ctx.identity().user_exists(entity_id).await?,
        };
        if !exists {
            return Err(DomainError::UnknownRateableTarget(target).into());
        }

        Ok(target)
    }
}
