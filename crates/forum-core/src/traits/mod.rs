//! Repository and collaborator traits (ports)

mod repositories;

pub use repositories::{
    BlogMembership, BlogRepository, FollowRepository, IdentityProvider, PostRepository,
    RatingLedger, RepoResult,
};
