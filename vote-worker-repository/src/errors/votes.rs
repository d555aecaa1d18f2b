//! Error types for the votes repository.
//! Defines specific errors that can occur during database operations on votes.
use thiserror::Error;

/// Represents errors that can occur within the votes repository.
///
/// This enum consolidates various error conditions specific to database
/// interactions, such as SQLx errors during database operations.
#[derive(Debug, Error)]
pub enum VotesRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}
