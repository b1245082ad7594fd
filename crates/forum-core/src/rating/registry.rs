//! Rateable-kind registry
//!
//! Rating is a capability an entity kind opts into, not something
//! inherited from a shared base type. The registry records which kinds
//! have opted in; the rating service refuses votes for any kind that has
//! not. Registration normally happens once at startup, before votes flow.

use parking_lot::RwLock;
use std::collections::HashSet;

use crate::value_objects::TargetKind;

/// Set of entity kinds allowed to accumulate votes
#[derive(Debug, Default)]
pub struct RateableRegistry {
    kinds: RwLock<HashSet<TargetKind>>,
}

impl RateableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the given kinds already registered
    pub fn with_kinds(kinds: impl IntoIterator<Item = TargetKind>) -> Self {
        Self {
            kinds: RwLock::new(kinds.into_iter().collect()),
        }
    }

    /// Declare a kind rateable; idempotent
    pub fn register_kind(&self, kind: TargetKind) {
        self.kinds.write().insert(kind);
    }

    /// Check whether a kind has been registered
    pub fn is_registered(&self, kind: TargetKind) -> bool {
        self.kinds.read().contains(&kind)
    }
}
