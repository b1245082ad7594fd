//! Service layer - application business logic

mod blog;
mod context;
mod error;
mod post;
mod rating;
mod subscription;

pub use blog::BlogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use rating::RatingService;
pub use subscription::SubscriptionService;
