//! Redis-backed vote source.
//!
//! Pops serialized vote events off a named list with a blocking pop and
//! forwards them, one payload per message, to the reconciliation loop.
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use tokio::sync::mpsc;

use crate::consumer::{ConsumeVotes, QueueMessage};
use crate::errors::ConsumerError;

/// Streams vote payloads from a Redis list.
pub struct RedisQueueSource {
    connection: MultiplexedConnection,
    queue_key: String,
}

impl RedisQueueSource {
    /// Creates a new source over an established connection.
    ///
    /// # Arguments
    ///
    /// * `connection` - A live multiplexed Redis connection.
    /// * `queue_key` - The list to pop vote payloads from.
    pub fn new(connection: MultiplexedConnection, queue_key: impl Into<String>) -> Self {
        Self {
            connection,
            queue_key: queue_key.into(),
        }
    }
}

#[async_trait::async_trait]
impl ConsumeVotes for RedisQueueSource {
    /// Pops elements from the queue list forever, forwarding each payload.
    ///
    /// `BLPOP` with a zero timeout suspends until the next element arrives,
    /// so an empty queue costs nothing. A queue error is forwarded to the
    /// receiver and ends the stream; the element order of the list is the
    /// order payloads are sent.
    async fn stream_votes(&self, sender: mpsc::Sender<QueueMessage>) -> Result<(), ConsumerError> {
        let mut connection = self.connection.clone();

        loop {
            let popped: Result<(String, String), redis::RedisError> =
                connection.blpop(&self.queue_key, 0.0).await;

            match popped {
                Ok((_key, payload)) => {
                    sender
                        .send(QueueMessage::Payload(payload))
                        .await
                        .map_err(|e| ConsumerError::ChannelSend(e.to_string()))?;
                }
                Err(err) => {
                    sender
                        .send(QueueMessage::Error(ConsumerError::Queue(err)))
                        .await
                        .map_err(|e| ConsumerError::ChannelSend(e.to_string()))?;
                    break;
                }
            }
        }

        Ok(())
    }
}
