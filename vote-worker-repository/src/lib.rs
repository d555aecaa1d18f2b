//! # Vote Worker Repository
//! This crate provides traits and implementations for interacting with the
//! votes data store. It includes definitions for errors, interfaces, and a
//! concrete implementation for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::VotesRepositoryError;
pub use interfaces::VotesRepository;
pub use postgres::PostgresVotesRepository;
