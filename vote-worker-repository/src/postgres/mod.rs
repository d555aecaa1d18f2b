//! PostgreSQL implementations of the repository interfaces.
mod votes_repository;

pub use votes_repository::PostgresVotesRepository;
