//! Vote record - the single live vote of one voter on one target

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{EntityId, RateableTarget, VoteValue};

/// The live vote of one (voter, target) pair
///
/// At most one record exists per pair at any time. A re-vote with the
/// opposite value flips this record in place; it is never duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub target: RateableTarget,
    pub voter_id: EntityId,
    pub value: VoteValue,
    pub cast_at: DateTime<Utc>,
}

impl VoteRecord {
    /// Create a new VoteRecord
    pub fn new(target: RateableTarget, voter_id: EntityId, value: VoteValue) -> Self {
        Self {
            target,
            voter_id,
            value,
            cast_at: Utc::now(),
        }
    }

    /// Flip the vote to the opposite value, refreshing the timestamp
    pub fn flip(&mut self) {
        self.value = self.value.flipped();
        self.cast_at = Utc::now();
    }
}
