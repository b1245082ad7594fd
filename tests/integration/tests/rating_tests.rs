//! Rating engine integration tests
//!
//! Exercise the full path: service -> registry -> ledger, over the
//! in-memory stores.

use forum_core::{DomainError, TargetKind, VoterState};
use forum_service::{RatingService, ServiceError};
use integration_tests::TestEnv;

// ============================================================================
// Vote Accounting
// ============================================================================

#[tokio::test]
async fn test_score_is_sum_of_live_votes() {
    let env = TestEnv::new();
    let author = env.new_user();
    let post = env.simple_post(author, "scoring").await;
    let ratings = env.ratings();

    for _ in 0..3 {
        let voter = env.new_user();
        ratings
            .rate(TargetKind::Post, post.id, voter, 1)
            .await
            .unwrap();
    }
    let downvoter = env.new_user();
    ratings
        .rate(TargetKind::Post, post.id, downvoter, -1)
        .await
        .unwrap();

    assert_eq!(ratings.score(TargetKind::Post, post.id).await.unwrap(), 2);
}

#[tokio::test]
async fn test_repeat_vote_is_idempotent() {
    let env = TestEnv::new();
    let author = env.new_user();
    let voter = env.new_user();
    let post = env.simple_post(author, "idempotent").await;
    let ratings = env.ratings();

    let first = ratings
        .rate(TargetKind::Post, post.id, voter, 1)
        .await
        .unwrap();
    let second = ratings
        .rate(TargetKind::Post, post.id, voter, 1)
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 1);
    assert_eq!(
        ratings
            .voter_state(TargetKind::Post, post.id, voter)
            .await
            .unwrap(),
        VoterState::Up
    );
}

#[tokio::test]
async fn test_opposite_vote_flips_score_by_two() {
    let env = TestEnv::new();
    let author = env.new_user();
    let voter = env.new_user();
    let post = env.simple_post(author, "flip").await;
    let ratings = env.ratings();

    assert_eq!(
        ratings
            .rate(TargetKind::Post, post.id, voter, 1)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        ratings
            .rate(TargetKind::Post, post.id, voter, -1)
            .await
            .unwrap(),
        -1
    );
    assert_eq!(
        ratings
            .voter_state(TargetKind::Post, post.id, voter)
            .await
            .unwrap(),
        VoterState::Down
    );
}

#[tokio::test]
async fn test_voter_state_starts_empty() {
    let env = TestEnv::new();
    let author = env.new_user();
    let bystander = env.new_user();
    let post = env.simple_post(author, "untouched").await;

    let state = env
        .ratings()
        .voter_state(TargetKind::Post, post.id, bystander)
        .await
        .unwrap();
    assert_eq!(state, VoterState::None);
}

#[tokio::test]
async fn test_rejects_out_of_range_values() {
    let env = TestEnv::new();
    let author = env.new_user();
    let voter = env.new_user();
    let post = env.simple_post(author, "bad values").await;
    let ratings = env.ratings();

    for raw in [0, 2, -2, 100] {
        let err = ratings
            .rate(TargetKind::Post, post.id, voter, raw)
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::Domain(DomainError::InvalidVoteValue(v)) if v == raw),
            "value {raw} should be rejected, got {err}"
        );
    }
    assert_eq!(ratings.score(TargetKind::Post, post.id).await.unwrap(), 0);
}

// ============================================================================
// Target Resolution
// ============================================================================

#[tokio::test]
async fn test_unregistered_kind_is_rejected() {
    let env = TestEnv::bare();
    let author = env.new_user();
    let voter = env.new_user();
    let post = env.simple_post(author, "not rateable yet").await;
    let ratings = env.ratings();

    let err = ratings
        .rate(TargetKind::Post, post.id, voter, 1)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UnknownRateableTarget(_))
    ));

    // Registration is all it takes to switch the capability on.
    ratings.register_kind(TargetKind::Post);
    assert_eq!(
        ratings
            .rate(TargetKind::Post, post.id, voter, 1)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_registration_gates_reads_too() {
    let env = TestEnv::bare();
    let author = env.new_user();
    let post = env.simple_post(author, "no reads either").await;

    let err = env
        .ratings()
        .score(TargetKind::Post, post.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UnknownRateableTarget(_))
    ));
}

#[tokio::test]
async fn test_missing_entity_is_rejected() {
    let env = TestEnv::new();
    let voter = env.new_user();
    let ghost = forum_core::EntityId::new(987_654_321);

    let err = env
        .ratings()
        .rate(TargetKind::Post, ghost, voter, 1)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UnknownRateableTarget(_))
    ));
}

#[tokio::test]
async fn test_blog_and_karma_share_the_engine() {
    let env = TestEnv::new();
    let (blog_id, owner) = env.blog_with_owner().await;
    let voter = env.new_user();
    let ratings = env.ratings();

    assert_eq!(
        ratings
            .rate(TargetKind::Blog, blog_id, voter, 1)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        ratings
            .rate(TargetKind::UserKarma, owner, voter, -1)
            .await
            .unwrap(),
        -1
    );

    // Same id under a different kind is a different ledger partition.
    assert_eq!(ratings.score(TargetKind::Blog, blog_id).await.unwrap(), 1);
    assert_eq!(
        ratings.score(TargetKind::UserKarma, owner).await.unwrap(),
        -1
    );
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_votes_are_not_lost() {
    let env = TestEnv::new();
    let author = env.new_user();
    let post = env.simple_post(author, "contended").await;

    let voters: Vec<_> = (0..100).map(|_| env.new_user()).collect();
    let mut handles = Vec::with_capacity(voters.len());
    for voter in voters {
        let ctx = env.ctx.clone();
        let post_id = post.id;
        handles.push(tokio::spawn(async move {
            RatingService::new(&ctx)
                .rate(TargetKind::Post, post_id, voter, 1)
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(
        env.ratings().score(TargetKind::Post, post.id).await.unwrap(),
        100
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_flips_settle_exactly() {
    let env = TestEnv::new();
    let author = env.new_user();
    let post = env.simple_post(author, "flippers").await;

    // Each voter votes down then up; every final live vote is +1.
    let voters: Vec<_> = (0..50).map(|_| env.new_user()).collect();
    let mut handles = Vec::with_capacity(voters.len());
    for voter in voters {
        let ctx = env.ctx.clone();
        let post_id = post.id;
        handles.push(tokio::spawn(async move {
            let ratings = RatingService::new(&ctx);
            ratings.rate(TargetKind::Post, post_id, voter, -1).await?;
            ratings.rate(TargetKind::Post, post_id, voter, 1).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(
        env.ratings().score(TargetKind::Post, post.id).await.unwrap(),
        50
    );
}
