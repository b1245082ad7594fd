//! Rateable target addressing
//!
//! A target is the (kind, id) pair votes accumulate against. Any entity
//! type can opt into rating by registering its kind; there is no shared
//! base type between rateable entities.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntityId;

/// Kind of entity that can accumulate votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Blog,
    Post,
    UserKarma,
}

impl TargetKind {
    /// Stable name used in logs and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Post => "post",
            Self::UserKarma => "user_karma",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address of one rateable entity: (kind, id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateableTarget {
    pub kind: TargetKind,
    pub id: EntityId,
}

impl RateableTarget {
    /// Create a new target address
    #[inline]
    pub const fn new(kind: TargetKind, id: EntityId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for RateableTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
