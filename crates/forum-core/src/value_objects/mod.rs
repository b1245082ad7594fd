//! Value objects - immutable domain values without identity

mod entity_id;
mod target;
mod vote;

pub use entity_id::{EntityId, EntityIdParseError, IdGenerator};
pub use target::{RateableTarget, TargetKind};
pub use vote::{VoteValue, VoterState};
