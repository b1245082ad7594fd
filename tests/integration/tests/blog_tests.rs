//! Blog integration tests

use forum_common::ForumConfig;
use forum_core::{DomainError, EntityId};
use forum_service::{CreateBlogRequest, ServiceError};
use integration_tests::TestEnv;

#[tokio::test]
async fn test_blog_type_comes_from_config() {
    let env = TestEnv::new();
    let owner = env.new_user();

    let blog = env
        .blogs()
        .create_blog(
            owner,
            CreateBlogRequest {
                name: "rustaceans".to_string(),
                description: "a place for crustaceans".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(blog.blog_type, "collective");
    assert_eq!(blog.owner_id, owner);

    let config = ForumConfig {
        default_blog_type: "personal".to_string(),
        ..ForumConfig::default()
    };
    let env = TestEnv::with_config(config);
    let owner = env.new_user();
    let blog = env
        .blogs()
        .create_blog(
            owner,
            CreateBlogRequest {
                name: "my corner".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
    assert_eq!(blog.blog_type, "personal");
}

#[tokio::test]
async fn test_blog_requires_existing_owner() {
    let env = TestEnv::new();

    let err = env
        .blogs()
        .create_blog(
            EntityId::new(999_999),
            CreateBlogRequest {
                name: "ghost blog".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UserNotFound(_))
    ));
}

#[tokio::test]
async fn test_blog_name_is_validated() {
    let env = TestEnv::new();
    let owner = env.new_user();

    let err = env
        .blogs()
        .create_blog(
            owner,
            CreateBlogRequest {
                name: String::new(),
                description: String::new(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_get_blog_roundtrip() -> anyhow::Result<()> {
    let env = TestEnv::new();
    let (blog_id, owner) = env.blog_with_owner().await;

    let fetched = env.blogs().get_blog(blog_id).await?;
    assert_eq!(fetched.id, blog_id);
    assert_eq!(fetched.owner_id, owner);

    let err = env.blogs().get_blog(EntityId::new(31_337)).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    Ok(())
}
