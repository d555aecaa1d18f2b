//! Queue connection establishment.
//!
//! Builds the Redis client once, then probes the server until it answers.
//! Only connectivity failures are retried; any other probe error is real
//! and propagates.
use redis::aio::MultiplexedConnection;
use tracing::{info, warn};

use crate::bootstrap::{RETRY_INTERVAL, RetryPolicy};
use crate::config::Settings;
use crate::errors::BootstrapError;

fn is_transient(err: &redis::RedisError) -> bool {
    err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_timeout()
        || err.is_io_error()
}

/// Connects to the queue, blocking until it is reachable.
///
/// An invalid connection URL fails immediately — a deployment defect, not a
/// transient condition. After that, each attempt opens a connection and
/// probes it with `PING`; connectivity failures are waited out with no
/// upper bound on attempts.
///
/// # Returns
///
/// A `Result` with a live connection, or a `BootstrapError` for failures
/// that retrying cannot fix.
pub async fn connect_queue(settings: &Settings) -> Result<MultiplexedConnection, BootstrapError> {
    let client = redis::Client::open(settings.redis_url())?;

    let connection = RetryPolicy::fixed(RETRY_INTERVAL)
        .run(
            || {
                let client = client.clone();
                async move {
                    let mut connection = client.get_multiplexed_async_connection().await?;
                    let _: String = redis::cmd("PING").query_async(&mut connection).await?;
                    Ok::<_, redis::RedisError>(connection)
                }
            },
            |err: &redis::RedisError| {
                let transient = is_transient(err);
                if transient {
                    warn!(error = %err, "waiting for queue");
                }
                transient
            },
        )
        .await?;

    info!("connected to queue");
    Ok(connection)
}
