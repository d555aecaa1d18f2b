//! Error types for the vote worker repository.
//! Consolidates and re-exports error types related to votes repository operations.
mod votes;

pub use votes::VotesRepositoryError;
