//! Subscription and star relation integration tests

use forum_core::{DomainError, EntityId};
use forum_service::ServiceError;
use integration_tests::TestEnv;

// ============================================================================
// Subscriptions
// ============================================================================

#[tokio::test]
async fn test_subscribe_then_check() {
    let env = TestEnv::new();
    let author = env.new_user();
    let reader = env.new_user();
    let post = env.simple_post(author, "followed").await;
    let subs = env.subscriptions();

    assert!(!subs.is_subscribed(reader, post.id).await.unwrap());
    subs.subscribe(reader, post.id).await.unwrap();
    assert!(subs.is_subscribed(reader, post.id).await.unwrap());
}

#[tokio::test]
async fn test_double_subscribe_is_rejected() {
    let env = TestEnv::new();
    let author = env.new_user();
    let reader = env.new_user();
    let post = env.simple_post(author, "once only").await;
    let subs = env.subscriptions();

    subs.subscribe(reader, post.id).await.unwrap();
    let err = subs.subscribe(reader, post.id).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::AlreadySubscribed { .. })
    ));
    assert_eq!(err.status_code(), 409);
}

#[tokio::test]
async fn test_unsubscribe_requires_subscription() {
    let env = TestEnv::new();
    let author = env.new_user();
    let reader = env.new_user();
    let post = env.simple_post(author, "never followed").await;
    let subs = env.subscriptions();

    let err = subs.unsubscribe(reader, post.id).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotSubscribed { .. })
    ));
}

#[tokio::test]
async fn test_subscription_alternation() {
    let env = TestEnv::new();
    let author = env.new_user();
    let reader = env.new_user();
    let post = env.simple_post(author, "on and off").await;
    let subs = env.subscriptions();

    for _ in 0..3 {
        subs.subscribe(reader, post.id).await.unwrap();
        assert!(subs.is_subscribed(reader, post.id).await.unwrap());
        subs.unsubscribe(reader, post.id).await.unwrap();
        assert!(!subs.is_subscribed(reader, post.id).await.unwrap());
    }
    // After the last unsubscribe the guards hold again.
    assert!(matches!(
        subs.unsubscribe(reader, post.id).await.unwrap_err(),
        ServiceError::Domain(DomainError::NotSubscribed { .. })
    ));
}

#[tokio::test]
async fn test_is_subscribed_is_total() {
    let env = TestEnv::new();

    // Neither the user nor the post exists; the check still answers.
    let answer = env
        .subscriptions()
        .is_subscribed(EntityId::new(1), EntityId::new(2))
        .await
        .unwrap();
    assert!(!answer);
}

#[tokio::test]
async fn test_subscription_listing_is_oldest_first() {
    let env = TestEnv::new();
    let author = env.new_user();
    let reader = env.new_user();
    let subs = env.subscriptions();

    let mut expected = Vec::new();
    for i in 0..3 {
        let post = env.simple_post(author, &format!("post {i}")).await;
        subs.subscribe(reader, post.id).await.unwrap();
        expected.push(post.id);
    }

    let listed = subs.subscriptions(reader).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|s| s.post_id).collect();
    assert_eq!(ids, expected);

    let stamps: Vec<chrono::DateTime<chrono::Utc>> =
        listed.iter().map(|s| s.created_at).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

// ============================================================================
// Stars
// ============================================================================

#[tokio::test]
async fn test_star_guards_mirror_subscriptions() {
    let env = TestEnv::new();
    let author = env.new_user();
    let reader = env.new_user();
    let post = env.simple_post(author, "starred").await;
    let subs = env.subscriptions();

    subs.star(reader, post.id).await.unwrap();
    assert!(subs.is_starred(reader, post.id).await.unwrap());

    let err = subs.star(reader, post.id).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::AlreadyStarred { .. })
    ));

    subs.unstar(reader, post.id).await.unwrap();
    let err = subs.unstar(reader, post.id).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotStarred { .. })
    ));
}

#[tokio::test]
async fn test_stars_and_subscriptions_are_independent() {
    let env = TestEnv::new();
    let author = env.new_user();
    let reader = env.new_user();
    let post = env.simple_post(author, "both relations").await;
    let subs = env.subscriptions();

    subs.star(reader, post.id).await.unwrap();
    assert!(!subs.is_subscribed(reader, post.id).await.unwrap());

    subs.subscribe(reader, post.id).await.unwrap();
    subs.unstar(reader, post.id).await.unwrap();
    assert!(subs.is_subscribed(reader, post.id).await.unwrap());
}
