//! Blog service

use tracing::{info, instrument};
use validator::Validate;

use forum_core::{Blog, DomainError, EntityId};

use crate::dto::{BlogResponse, CreateBlogRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a blog owned by the given user
    ///
    /// The blog type is not part of the request; it comes from
    /// configuration.
    #[instrument(skip(self, req))]
    pub async fn create_blog(
        &self,
        owner_id: EntityId,
        req: CreateBlogRequest,
    ) -> ServiceResult<BlogResponse> {
        req.validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        if !self.ctx.identity().user_exists(owner_id).await? {
            return Err(DomainError::UserNotFound(owner_id).into());
        }

        let blog = Blog::new(
            self.ctx.generate_id(),
            req.name.trim().to_string(),
            req.description,
            owner_id,
            self.ctx.config().default_blog_type.clone(),
        );
        self.ctx.blog_repo().create(&blog).await?;

        info!(blog_id = %blog.id, owner_id = %owner_id, "blog created");
        Ok(BlogResponse::from(&blog))
    }

    /// Fetch a blog by id
    #[instrument(skip(self))]
    pub async fn get_blog(&self, blog_id: EntityId) -> ServiceResult<BlogResponse> {
        let blog = self
            .ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog", blog_id.to_string()))?;
        Ok(BlogResponse::from(&blog))
    }
}
