//! # forum-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! the rateable-kind registry. This crate has zero dependencies on
//! infrastructure (storage backend, web framework, etc.).

pub mod entities;
pub mod error;
pub mod rating;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AnswerOption, Blog, Post, PostContent, PostKind, Subscription, VoteRecord};
pub use error::DomainError;
pub use rating::RateableRegistry;
pub use traits::{
    BlogMembership, BlogRepository, FollowRepository, IdentityProvider, PostRepository,
    RatingLedger, RepoResult,
};
pub use value_objects::{
    EntityId, EntityIdParseError, IdGenerator, RateableTarget, TargetKind, VoteValue, VoterState,
};
