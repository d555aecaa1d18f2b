use std::sync::Arc;

use vote_worker_pipeline::consumer::VotesConsumer;
use vote_worker_pipeline::consumer::queue::RedisQueueSource;
use vote_worker_pipeline::loader::VotesLoader;
use vote_worker_repository::{PostgresVotesRepository, VotesRepository};

use crate::bootstrap;
use crate::config::Settings;
use crate::errors::WorkerError;

/// Name of the queue list holding serialized vote events.
const VOTES_QUEUE: &str = "votes";

/// `Dependencies` struct holds the necessary components for the vote worker.
///
/// It includes a consumer for ingesting vote events from the queue and a
/// loader for persisting them into the store.
pub struct Dependencies {
    pub consumer: Box<VotesConsumer>,
    pub loader: Box<VotesLoader>,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance.
    ///
    /// Bootstrapping is strictly sequential: the queue connection first,
    /// then the store, then the idempotent schema-ensure — all before the
    /// reconciliation loop starts. Each connection attempt blocks until its
    /// dependency is reachable.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `WorkerError` if any dependency fails to initialize.
    pub async fn new(settings: &Settings) -> Result<Self, WorkerError> {
        let queue_connection = bootstrap::connect_queue(settings).await?;
        let pool = bootstrap::connect_store(settings).await?;

        let repository = Arc::new(PostgresVotesRepository::new(pool));
        repository.ensure_schema().await?;

        let source = RedisQueueSource::new(queue_connection, VOTES_QUEUE);
        let consumer = VotesConsumer::new(Box::new(source));
        let loader = VotesLoader::new(repository);

        Ok(Dependencies {
            consumer: Box::new(consumer),
            loader: Box::new(loader),
        })
    }
}
