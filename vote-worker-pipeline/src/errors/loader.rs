//! Error types for the loader module of the vote worker pipeline.
//! Defines specific errors that can occur during the persistence of votes.
use thiserror::Error;
use vote_worker_repository::VotesRepositoryError;

/// Represents errors that can occur within the vote loader.
///
/// This enum consolidates error conditions specific to the loading process,
/// including errors propagated from the votes repository.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Votes repository error: {0}")]
    VotesRepository(#[from] VotesRepositoryError),
}
