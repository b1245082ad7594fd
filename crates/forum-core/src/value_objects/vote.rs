//! Vote values and per-voter state
//!
//! The model has no abstain: a live vote is either up or down, and a
//! voter holds at most one live vote per target.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Value of a single vote: +1 or -1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    /// Numeric contribution to the aggregate score
    #[inline]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// The opposite vote value
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl TryFrom<i64> for VoteValue {
    type Error = DomainError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            other => Err(DomainError::InvalidVoteValue(other)),
        }
    }
}

impl fmt::Display for VoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.as_i64())
    }
}

/// How a given voter currently stands on a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoterState {
    #[default]
    None,
    Up,
    Down,
}

impl From<VoteValue> for VoterState {
    fn from(value: VoteValue) -> Self {
        match value {
            VoteValue::Up => Self::Up,
            VoteValue::Down => Self::Down,
        }
    }
}

impl From<Option<VoteValue>> for VoterState {
    fn from(value: Option<VoteValue>) -> Self {
        value.map_or(Self::None, Self::from)
    }
}
