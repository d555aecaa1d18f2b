//! Error types for the vote worker application.
//! Defines a comprehensive set of errors that can occur while the worker
//! runs, consolidating errors from configuration, bootstrap, and the
//! pipeline. The process terminates on any of them; recovery happens below
//! this level or not at all.
use thiserror::Error;

use crate::config::ConfigError;

/// Represents errors raised while establishing external connections.
///
/// These surface only when a failure is not worth retrying — connectivity
/// failures are waited out inside the bootstrap loops and never reach the
/// caller.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Queue error: {0}")]
    Queue(#[from] redis::RedisError),
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Top-level error for the worker process.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),
    #[error("Repository error: {0}")]
    Repository(#[from] vote_worker_repository::VotesRepositoryError),
    #[error("Orchestrator error: {0}")]
    Orchestrator(#[from] vote_worker_pipeline::errors::OrchestratorError),
}
