//! Error types for the orchestrator module of the vote worker pipeline.
//! Defines the fatal conditions that end the reconciliation loop.
use thiserror::Error;

use crate::errors::consumer::ConsumerError;
use crate::errors::loader::LoaderError;

/// Represents errors that can occur within the reconciliation loop.
///
/// Either side of the loop can fail it: the queue consumer, or the loader
/// applying an upsert. Both are fatal for the loop; the caller decides
/// whether they are fatal for the process.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("Consumer error: {0}")]
    Consumer(#[from] ConsumerError),
    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),
}
