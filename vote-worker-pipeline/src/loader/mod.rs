//! This module defines the `VotesLoader` struct responsible for persisting
//! decoded vote events to a repository.
//! It acts as an interface between the reconciliation loop and the data storage.
pub use crate::errors::LoaderError;
pub use vote_worker_repository::{VotesRepository, VotesRepositoryError};
use std::sync::Arc;
use vote_worker_shared::types::{VoteEvent, VoteRecord};

/// `VotesLoader` is responsible for loading and persisting vote events.
///
/// It utilizes a `VotesRepository` to interact with the underlying data store,
/// ensuring that each processed vote becomes the voter's current record.
pub struct VotesLoader {
    pub votes_repository: Arc<dyn VotesRepository>,
}

impl VotesLoader {
    /// Creates a new `VotesLoader` instance.
    ///
    /// # Arguments
    ///
    /// * `votes_repository` - An `Arc` trait object that implements
    ///   `VotesRepository`, providing the interface for data persistence.
    ///
    /// # Returns
    ///
    /// A new `VotesLoader` instance.
    pub fn new(votes_repository: Arc<dyn VotesRepository>) -> Self {
        Self { votes_repository }
    }

    /// Persists a single vote event as the voter's current record.
    ///
    /// The upsert is idempotent: re-applying the same event converges to
    /// the same stored vote.
    ///
    /// # Arguments
    ///
    /// * `event` - A reference to the `VoteEvent` to be persisted.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `LoaderError` if persistence fails.
    pub async fn apply_vote(&self, event: &VoteEvent) -> Result<(), LoaderError> {
        let record = VoteRecord::from(event.clone());
        self.votes_repository.upsert_vote(&record).await?;
        Ok(())
    }
}
