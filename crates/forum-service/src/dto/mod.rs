//! Data transfer objects for the service layer

mod requests;
mod responses;

pub use requests::{CreateBlogRequest, CreatePostRequest, EditPostRequest};
pub use responses::{AnswerOptionResponse, BlogResponse, PostResponse, SubscriptionResponse};
