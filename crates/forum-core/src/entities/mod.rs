//! Domain entities

mod blog;
mod post;
mod subscription;
mod vote_record;

pub use blog::Blog;
pub use post::{AnswerOption, Post, PostContent, PostKind};
pub use subscription::Subscription;
pub use vote_record::VoteRecord;
