//! # forum-service
//!
//! Application layer containing business logic, services, and DTOs.
//! This is the surface the (external) web layer calls into.

pub mod dto;
pub mod services;

pub use dto::{
    AnswerOptionResponse, BlogResponse, CreateBlogRequest, CreatePostRequest, EditPostRequest,
    PostResponse, SubscriptionResponse,
};
pub use services::{
    BlogService, PostService, RatingService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SubscriptionService,
};
