//! Error types for the consumer module of the vote worker pipeline.
//! Defines specific errors that can occur while consuming vote events.
use thiserror::Error;

/// Represents errors that can occur within the vote consumer.
///
/// This enum consolidates error conditions specific to the consumption
/// process, from the queue backend itself and from the channel toward the
/// reconciliation loop.
#[derive(Debug, Error)]
pub enum ConsumerError {
    #[error("Queue error: {0}")]
    Queue(#[from] redis::RedisError),
    #[error("Error sending message through channel: {0}")]
    ChannelSend(String),
}
