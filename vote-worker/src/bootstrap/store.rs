//! Store connection establishment.
//!
//! Opens the PostgreSQL pool, retrying on a fixed cadence until the server
//! accepts the connection.
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use crate::bootstrap::{RETRY_INTERVAL, RetryPolicy};
use crate::config::Settings;
use crate::errors::BootstrapError;

/// Connects to the store, blocking until it accepts connections.
///
/// Every connection failure is retried: while the server boots it may be
/// absent, refusing sockets, or rejecting authentication, and none of those
/// is reported consistently enough to single out. Malformed configuration
/// is caught earlier, when `Settings` is read.
///
/// # Returns
///
/// A `Result` with a ready connection pool. The caller runs the idempotent
/// schema-ensure before steady-state processing starts.
pub async fn connect_store(settings: &Settings) -> Result<PgPool, BootstrapError> {
    let options = settings.postgres_connect_options();

    let pool = RetryPolicy::fixed(RETRY_INTERVAL)
        .run(
            || {
                let options = options.clone();
                async move {
                    PgPoolOptions::new()
                        .max_connections(5)
                        .connect_with(options)
                        .await
                }
            },
            |err: &sqlx::Error| {
                warn!(error = %err, "waiting for store");
                true
            },
        )
        .await?;

    info!("connected to store");
    Ok(pool)
}
