//! This module defines the `VotesRepository` trait, which provides an
//! interface for interacting with the underlying data store for votes.
//! It abstracts the database operations for persistence and retrieval.
use vote_worker_shared::types::VoteRecord;

use crate::errors::VotesRepositoryError;

/// A trait that defines the interface for interacting with the votes data store.
///
/// Implementors of this trait provide methods for ensuring the schema exists,
/// upserting per-voter records, and reading them back.
#[async_trait::async_trait]
pub trait VotesRepository: Send + Sync {
    /// Ensures the `votes` table exists.
    ///
    /// This statement is idempotent: it is safe to run on every process
    /// start regardless of whether the table pre-exists.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `VotesRepositoryError` if the
    /// statement fails.
    async fn ensure_schema(&self) -> Result<(), VotesRepositoryError>;

    /// Inserts the record for a previously unseen voter, or overwrites the
    /// stored vote for a known one (latest-write-wins).
    ///
    /// # Arguments
    ///
    /// * `record` - The `VoteRecord` to persist.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `VotesRepositoryError` if the
    /// upsert fails.
    async fn upsert_vote(&self, record: &VoteRecord) -> Result<(), VotesRepositoryError>;

    /// Retrieves the stored record for a voter, if any.
    ///
    /// # Arguments
    ///
    /// * `voter_id` - The voter identity to look up.
    ///
    /// # Returns
    ///
    /// A `Result` with the matching `VoteRecord`, `None` if the voter has
    /// not voted, or a `VotesRepositoryError` if the query fails.
    async fn get_vote(&self, voter_id: &str) -> Result<Option<VoteRecord>, VotesRepositoryError>;
}
