//! In-memory implementation of RatingLedger
//!
//! One `DashMap` entry per target, each holding its own mutex. A vote
//! update locks only its target's mutex, so casts against different
//! targets never serialize against each other, while two casts on the
//! same target apply one after the other with no partial state visible
//! in between.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

use forum_core::entities::VoteRecord;
use forum_core::traits::{RatingLedger, RepoResult};
use forum_core::value_objects::{EntityId, RateableTarget, VoteValue, VoterState};

/// Per-target vote state guarded by the entry mutex
#[derive(Default)]
struct TargetLedger {
    score: i64,
    votes: HashMap<EntityId, VoteRecord>,
}

/// In-memory implementation of RatingLedger
#[derive(Default)]
pub struct MemoryRatingLedger {
    targets: DashMap<RateableTarget, Mutex<TargetLedger>>,
}

impl MemoryRatingLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingLedger for MemoryRatingLedger {
    async fn cast_vote(
        &self,
        target: RateableTarget,
        voter_id: EntityId,
        value: VoteValue,
    ) -> RepoResult<i64> {
        loop {
            // Fast path holds only a shard read lock around the target mutex.
            if let Some(cell) = self.targets.get(&target) {
                let mut ledger = cell.lock();
                let TargetLedger { score, votes } = &mut *ledger;

                match votes.entry(voter_id) {
                    Entry::Vacant(slot) => {
                        slot.insert(VoteRecord::new(target, voter_id, value));
                        *score += value.as_i64();
                    }
                    Entry::Occupied(mut slot) => {
                        let record = slot.get_mut();
                        if record.value == value {
                            // Idempotent re-vote: nothing moves.
                            debug!(%target, %voter_id, %value, "repeated vote ignored");
                        } else {
                            record.flip();
                            *score += 2 * value.as_i64();
                        }
                    }
                }
                return Ok(*score);
            }

            // First vote on this target: materialize the partition, retry.
            self.targets.entry(target).or_default();
        }
    }

    async fn current_score(&self, target: RateableTarget) -> RepoResult<i64> {
        Ok(self.targets.get(&target).map_or(0, |cell| cell.lock().score))
    }

    async fn voter_state(
        &self,
        target: RateableTarget,
        voter_id: EntityId,
    ) -> RepoResult<VoterState> {
        let state = self.targets.get(&target).map_or(VoterState::None, |cell| {
            cell.lock()
                .votes
                .get(&voter_id)
                .map(|record| record.value)
                .into()
        });
        Ok(state)
    }
}
