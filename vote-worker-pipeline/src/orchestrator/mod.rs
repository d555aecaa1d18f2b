//! This module defines the `Orchestrator` responsible for the steady-state
//! reconciliation loop.
//! It drains the queue consumer and keeps the store's per-voter record
//! current through the loader.
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use vote_worker_shared::types::VoteEvent;

use crate::consumer::{QueueMessage, VotesConsumer};
use crate::errors::OrchestratorError;
use crate::loader::VotesLoader;

/// `Orchestrator` coordinates the consumption and persistence of votes.
///
/// It owns the consumer and the loader, joining them with a FIFO channel so
/// events are applied strictly one at a time in arrival order.
pub struct Orchestrator {
    pub votes_consumer: Box<VotesConsumer>,
    pub votes_loader: Box<VotesLoader>,
}

impl Orchestrator {
    /// Creates a new `Orchestrator` instance.
    ///
    /// # Arguments
    ///
    /// * `votes_consumer` - A boxed `VotesConsumer` instance
    /// * `votes_loader` - A boxed `VotesLoader` instance
    ///
    /// # Returns
    ///
    /// A new `Orchestrator` instance.
    pub fn new(votes_consumer: Box<VotesConsumer>, votes_loader: Box<VotesLoader>) -> Self {
        Self {
            votes_consumer,
            votes_loader,
        }
    }

    /// Runs the reconciliation loop.
    ///
    /// The consumer blocks on the queue in its own task; this loop receives
    /// one payload at a time, decodes it, and applies the upsert before
    /// touching the next element. A malformed payload is logged and
    /// discarded. A consumer failure or a store failure ends the loop with
    /// an error — terminating the process is the caller's decision.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or an `OrchestratorError` if a fatal
    /// error occurs while the loop is running.
    pub async fn run(self) -> Result<(), OrchestratorError> {
        let (tx, mut rx) = mpsc::channel(1000);

        let consumer = self.votes_consumer;
        let loader = self.votes_loader;

        tokio::spawn(async move {
            if let Err(e) = consumer.run(tx).await {
                error!(error = %e, "consumer terminated");
            }
        });

        while let Some(message) = rx.recv().await {
            match message {
                QueueMessage::Payload(payload) => {
                    let event = match decode_vote(&payload) {
                        Ok(event) => event,
                        Err(err) => {
                            warn!(error = %err, payload = %payload, "discarding malformed vote payload");
                            continue;
                        }
                    };

                    info!(voter_id = %event.voter_id, vote = %event.vote, "processing vote");
                    loader.apply_vote(&event).await?;
                }
                QueueMessage::Error(err) => {
                    return Err(OrchestratorError::Consumer(err));
                }
            }
        }

        Ok(())
    }
}

/// Decodes one queue payload into a `VoteEvent`.
///
/// Both string fields are required; anything else is a decode failure.
fn decode_vote(payload: &str) -> Result<VoteEvent, serde_json::Error> {
    serde_json::from_str(payload)
}
