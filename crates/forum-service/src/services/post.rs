//! Post service
//!
//! The content pipeline: payload in, validated kind-specific post out.
//! Validation is all-or-nothing; nothing is written until the whole
//! payload has passed the checks for its declared kind.

use tracing::{info, instrument};
use validator::ValidateUrl;

use forum_core::{AnswerOption, DomainError, EntityId, Post, PostContent, PostKind};

use crate::dto::{CreatePostRequest, EditPostRequest, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and materialize a new post
    ///
    /// For polls this includes the dependent answer options; the post
    /// and its answers are persisted as one unit.
    #[instrument(skip(self, req), fields(kind = %req.kind))]
    pub async fn create_post(
        &self,
        author_id: EntityId,
        req: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let title = self.checked_title(&req.title)?;
        self.check_blog_association(req.blog, author_id).await?;

        let post_id = self.ctx.generate_id();
        let content = self.build_content(post_id, &req)?;
        let post = Post::new(post_id, author_id, req.blog, title, content);

        self.ctx.post_repo().create(&post).await?;

        info!(
            post_id = %post.id,
            author_id = %author_id,
            kind = %post.kind(),
            "post created"
        );
        Ok(PostResponse::from(&post))
    }

    /// Apply a partial edit to an existing post
    ///
    /// Only supplied fields are re-validated, against the post's
    /// existing kind. Identity, kind, rating state, and subscriptions
    /// are untouched.
    #[instrument(skip(self, req))]
    pub async fn edit_post(
        &self,
        post_id: EntityId,
        req: EditPostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        if let Some(title) = &req.title {
            post.set_title(self.checked_title(title)?);
        }
        if let Some(text) = &req.text {
            post.set_body(self.checked_body(post.kind(), text)?);
        }
        if let Some(addition) = &req.addition {
            // Kinds without a URL ignore the field, as creation does.
            if matches!(post.kind(), PostKind::Link | PostKind::Translate) {
                post.set_url(checked_url(addition)?);
            }
        }
        if let Some(is_draft) = req.is_draft {
            post.is_draft = is_draft;
        }
        if let Some(locked) = req.is_commenting_locked {
            post.is_commenting_locked = locked;
        }

        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post.id, "post edited");
        Ok(PostResponse::from(&post))
    }

    /// Fetch a post by id
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: EntityId) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;
        Ok(PostResponse::from(&post))
    }

    /// Build the kind-specific payload, running that kind's checks
    fn build_content(
        &self,
        post_id: EntityId,
        req: &CreatePostRequest,
    ) -> ServiceResult<PostContent> {
        match req.kind {
            PostKind::Simple => {
                let body = req.text.as_deref().unwrap_or_default();
                if body.trim().is_empty() {
                    return Err(content_error("text", "body must not be empty").into());
                }
                Ok(PostContent::Simple {
                    body: self.checked_body(PostKind::Simple, body)?,
                })
            }
            PostKind::Link | PostKind::Translate => {
                let addition = req
                    .addition
                    .as_deref()
                    .ok_or_else(|| content_error("addition", "external URL is required"))?;
                let url = checked_url(addition)?;
                let body = match req.text.as_deref() {
                    Some(text) if !text.trim().is_empty() => {
                        Some(self.checked_body(req.kind, text)?)
                    }
                    _ => None,
                };
                Ok(match req.kind {
                    PostKind::Link => PostContent::Link { body, url },
                    _ => PostContent::Translate { body, url },
                })
            }
            PostKind::Poll => Ok(PostContent::Poll {
                answers: self.build_answers(post_id, &req.answers)?,
            }),
        }
    }

    /// Materialize poll answers, preserving submission order
    fn build_answers(
        &self,
        post_id: EntityId,
        texts: &[String],
    ) -> ServiceResult<Vec<AnswerOption>> {
        if texts.is_empty() {
            return Err(content_error("answers", "a poll needs at least one answer").into());
        }
        let max = self.ctx.config().max_poll_answers;
        if texts.len() > max {
            return Err(content_error("answers", format!("at most {max} answers allowed")).into());
        }

        let mut answers: Vec<AnswerOption> = Vec::with_capacity(texts.len());
        for (position, raw) in texts.iter().enumerate() {
            let text = raw.trim();
            if text.is_empty() {
                return Err(content_error("answers", "answer text must not be empty").into());
            }
            if answers.iter().any(|a| a.text == text) {
                return Err(DomainError::DuplicateAnswerOption(text.to_string()).into());
            }
            answers.push(AnswerOption::new(
                self.ctx.generate_id(),
                post_id,
                text.to_string(),
                position as u32,
            ));
        }
        Ok(answers)
    }

    /// Enforce the blog-association precondition
    async fn check_blog_association(
        &self,
        blog_id: Option<EntityId>,
        author_id: EntityId,
    ) -> ServiceResult<()> {
        let Some(blog_id) = blog_id else {
            return Ok(());
        };
        if !self.ctx.blog_repo().exists(blog_id).await? {
            return Err(DomainError::BlogNotFound(blog_id).into());
        }
        if !self.ctx.membership().is_member(blog_id, author_id).await? {
            return Err(DomainError::NotBlogMember { blog_id, user_id: author_id }.into());
        }
        Ok(())
    }

    fn checked_title(&self, raw: &str) -> ServiceResult<String> {
        let title = raw.trim();
        if title.is_empty() {
            return Err(content_error("title", "must not be empty").into());
        }
        let max = self.ctx.config().max_title_length;
        if title.chars().count() > max {
            return Err(content_error("title", format!("at most {max} characters")).into());
        }
        Ok(title.to_string())
    }

    fn checked_body(&self, kind: PostKind, raw: &str) -> ServiceResult<String> {
        if kind == PostKind::Poll {
            return Err(content_error("text", "poll posts have no body").into());
        }
        if kind == PostKind::Simple && raw.trim().is_empty() {
            return Err(content_error("text", "body must not be empty").into());
        }
        let max = self.ctx.config().max_body_length;
        if raw.chars().count() > max {
            return Err(content_error("text", format!("at most {max} characters")).into());
        }
        Ok(raw.to_string())
    }
}

fn checked_url(raw: &str) -> ServiceResult<String> {
    let url = raw.trim();
    if !url.validate_url() {
        return Err(content_error("addition", "not a valid URL").into());
    }
    Ok(url.to_string())
}

fn content_error(field: &'static str, reason: impl Into<String>) -> DomainError {
    DomainError::ContentValidation {
        field,
        reason: reason.into(),
    }
}
