//! One-time startup phase: establishes the queue and store connections
//! before the reconciliation loop begins.
//!
//! Both dependencies may come up after this process does; connection
//! attempts wait them out on a fixed cadence with no upper bound.
mod queue;
mod retry;
mod store;

use std::time::Duration;

pub use queue::connect_queue;
pub use retry::RetryPolicy;
pub use store::connect_store;

/// Pause between connection attempts against an unreachable dependency.
pub const RETRY_INTERVAL: Duration = Duration::from_millis(1000);
