//! Consumer module for the vote worker pipeline.
//!
//! Provides the `ConsumeVotes` trait for consuming vote events from queue
//! backends. Acts as the entry point for the pipeline, feeding raw payloads
//! to the reconciliation loop.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::errors::ConsumerError;

pub mod queue;

/// Messages emitted by a vote source toward the reconciliation loop.
#[derive(Debug)]
pub enum QueueMessage {
    /// One raw queue payload, not yet decoded.
    Payload(String),
    /// The source failed; the loop treats this as fatal.
    Error(ConsumerError),
}

/// Trait for consuming vote events from a queue backend.
///
/// Provides a unified interface for different sources (a Redis list in
/// production, scripted fixtures in tests).
#[async_trait]
pub trait ConsumeVotes: Send + Sync {
    /// Streams raw vote payloads into `sender` until the source ends.
    ///
    /// Returns an error only when the stream cannot be driven at all; a
    /// failure of the backend itself is reported through the channel as
    /// `QueueMessage::Error`.
    async fn stream_votes(&self, sender: mpsc::Sender<QueueMessage>) -> Result<(), ConsumerError>;
}

/// `VotesConsumer` wraps the configured vote source for the orchestrator.
pub struct VotesConsumer {
    source: Box<dyn ConsumeVotes>,
}

impl VotesConsumer {
    /// Creates a new `VotesConsumer` instance.
    ///
    /// # Arguments
    ///
    /// * `source` - A boxed trait object implementing `ConsumeVotes`.
    ///
    /// # Returns
    ///
    /// A new `VotesConsumer` instance.
    pub fn new(source: Box<dyn ConsumeVotes>) -> Self {
        Self { source }
    }

    /// Runs the source, forwarding its messages into `sender`.
    pub async fn run(&self, sender: mpsc::Sender<QueueMessage>) -> Result<(), ConsumerError> {
        self.source.stream_votes(sender).await
    }
}
