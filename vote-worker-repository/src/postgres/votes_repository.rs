//! PostgreSQL implementation of the votes repository.
//!
//! Backs the `VotesRepository` trait with a `sqlx::PgPool`. The table is a
//! flat mapping from voter identity to their most recent vote; writes go
//! through PostgreSQL's native `ON CONFLICT DO UPDATE` upsert so a row is
//! created on a voter's first vote and overwritten on every later one in a
//! single atomic statement.
use async_trait::async_trait;
use sqlx::Row;
use vote_worker_shared::types::VoteRecord;

use crate::{VotesRepository, VotesRepositoryError};

/// PostgreSQL implementation of the votes repository.
///
/// Holds a connection pool; all statements run against it directly. No
/// transaction wrapping is needed because every operation is a single
/// statement.
pub struct PostgresVotesRepository {
    pool: sqlx::PgPool,
}

impl PostgresVotesRepository {
    /// Creates a new PostgreSQL repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool
    ///
    /// # Returns
    ///
    /// A ready-to-use repository instance. Call `ensure_schema` before the
    /// first write.
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VotesRepository for PostgresVotesRepository {
    /// Creates the `votes` table if it does not exist.
    ///
    /// Safe to run on every process start; the second and later invocations
    /// are no-ops.
    async fn ensure_schema(&self) -> Result<(), VotesRepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS votes (
                id TEXT NOT NULL UNIQUE,
                vote TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Upserts one voter's record.
    ///
    /// Inserts `(id, vote)` or, when the voter already has a row, overwrites
    /// the stored vote. Last write wins; re-applying the same record
    /// converges to the same state.
    async fn upsert_vote(&self, record: &VoteRecord) -> Result<(), VotesRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO votes (id, vote)
            VALUES ($1, $2)
            ON CONFLICT (id)
            DO UPDATE SET vote = EXCLUDED.vote
            "#,
        )
        .bind(&record.voter_id)
        .bind(&record.vote)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Fetches the stored record for a voter.
    async fn get_vote(&self, voter_id: &str) -> Result<Option<VoteRecord>, VotesRepositoryError> {
        let row = sqlx::query("SELECT id, vote FROM votes WHERE id = $1")
            .bind(voter_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(VoteRecord {
                voter_id: row.try_get("id")?,
                vote: row.try_get("vote")?,
            })),
            None => Ok(None),
        }
    }
}
