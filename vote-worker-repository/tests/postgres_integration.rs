//! Integration tests for the PostgreSQL votes repository implementation.
//!
//! These tests require a real PostgreSQL database and use SQLx test macros
//! to ensure proper test isolation and cleanup.
//!
//! Run with: `cargo test --test postgres_integration`

use sqlx::Row;
use vote_worker_repository::{PostgresVotesRepository, VotesRepository};
use vote_worker_shared::types::VoteRecord;

/// Creates a test vote record with default values.
fn make_vote_record() -> VoteRecord {
    VoteRecord {
        voter_id: "voter-42".to_string(),
        vote: "b".to_string(),
    }
}

async fn make_repository(pool: &sqlx::PgPool) -> PostgresVotesRepository {
    let repository = PostgresVotesRepository::new(pool.clone());
    repository.ensure_schema().await.unwrap();
    repository
}

// ============================================================================
// Schema Tests
// ============================================================================

#[sqlx::test]
async fn test_ensure_schema_is_idempotent(pool: sqlx::PgPool) {
    let repository = PostgresVotesRepository::new(pool.clone());

    repository.ensure_schema().await.unwrap();
    repository.ensure_schema().await.unwrap();

    let table_exists: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM information_schema.tables WHERE table_name = 'votes')",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert!(table_exists);
}

#[sqlx::test]
async fn test_ensure_schema_preserves_existing_rows(pool: sqlx::PgPool) {
    let repository = make_repository(&pool).await;
    repository.upsert_vote(&make_vote_record()).await.unwrap();

    repository.ensure_schema().await.unwrap();

    let rows = sqlx::query("SELECT * FROM votes")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}

// ============================================================================
// Upsert Tests
// ============================================================================

#[sqlx::test]
async fn test_first_vote_creates_one_row(pool: sqlx::PgPool) {
    let repository = make_repository(&pool).await;

    repository.upsert_vote(&make_vote_record()).await.unwrap();

    let rows = sqlx::query("SELECT id, vote FROM votes")
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<String, _>("id"), "voter-42");
    assert_eq!(rows[0].get::<String, _>("vote"), "b");
}

#[sqlx::test]
async fn test_second_vote_updates_in_place(pool: sqlx::PgPool) {
    let repository = make_repository(&pool).await;

    repository.upsert_vote(&make_vote_record()).await.unwrap();
    repository
        .upsert_vote(&VoteRecord {
            voter_id: "voter-42".to_string(),
            vote: "a".to_string(),
        })
        .await
        .unwrap();

    let rows = sqlx::query("SELECT id, vote FROM votes")
        .fetch_all(&pool)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<String, _>("vote"), "a");
}

#[sqlx::test]
async fn test_replaying_a_prefix_converges_to_last_vote(pool: sqlx::PgPool) {
    let repository = make_repository(&pool).await;

    let sequence = ["a", "b", "c"];
    for vote in sequence {
        repository
            .upsert_vote(&VoteRecord {
                voter_id: "voter-7".to_string(),
                vote: vote.to_string(),
            })
            .await
            .unwrap();
    }

    // Replay a prefix, then the final event again.
    for vote in ["a", "b", "c"] {
        repository
            .upsert_vote(&VoteRecord {
                voter_id: "voter-7".to_string(),
                vote: vote.to_string(),
            })
            .await
            .unwrap();
    }

    let stored = repository.get_vote("voter-7").await.unwrap().unwrap();
    assert_eq!(stored.vote, "c");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM votes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_votes_for_different_voters_do_not_collide(pool: sqlx::PgPool) {
    let repository = make_repository(&pool).await;

    repository
        .upsert_vote(&VoteRecord {
            voter_id: "voter-1".to_string(),
            vote: "a".to_string(),
        })
        .await
        .unwrap();
    repository
        .upsert_vote(&VoteRecord {
            voter_id: "voter-2".to_string(),
            vote: "b".to_string(),
        })
        .await
        .unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM votes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);

    assert_eq!(
        repository.get_vote("voter-1").await.unwrap().unwrap().vote,
        "a"
    );
    assert_eq!(
        repository.get_vote("voter-2").await.unwrap().unwrap().vote,
        "b"
    );
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[sqlx::test]
async fn test_get_vote_for_unknown_voter_returns_none(pool: sqlx::PgPool) {
    let repository = make_repository(&pool).await;

    let stored = repository.get_vote("voter-unknown").await.unwrap();
    assert!(stored.is_none());
}

#[sqlx::test]
async fn test_end_to_end_voter_scenario(pool: sqlx::PgPool) {
    let repository = make_repository(&pool).await;

    // {"voter_id": "voter-42", "vote": "b"} processed first...
    repository.upsert_vote(&make_vote_record()).await.unwrap();
    let stored = repository.get_vote("voter-42").await.unwrap().unwrap();
    assert_eq!(stored.vote, "b");

    // ...then a follow-up {"voter_id": "voter-42", "vote": "a"} updates the
    // same row without adding a second one.
    repository
        .upsert_vote(&VoteRecord {
            voter_id: "voter-42".to_string(),
            vote: "a".to_string(),
        })
        .await
        .unwrap();

    let stored = repository.get_vote("voter-42").await.unwrap().unwrap();
    assert_eq!(stored.vote, "a");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM votes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
