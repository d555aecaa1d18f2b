use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use vote_worker::config::Settings;
use vote_worker::{Dependencies, WorkerError};
use vote_worker_pipeline::orchestrator::Orchestrator;

/// Main entry point for the vote worker application.
///
/// Initializes dotenv and tracing, wires up application dependencies, and
/// starts the orchestrator to drain the vote queue.
///
/// # Returns
///
/// A `Result` indicating success or a `WorkerError` if an error occurs
/// during initialization or execution.
#[tokio::main]
async fn main() -> Result<(), WorkerError> {
    dotenv().ok();
    init_tracing();

    let settings = Settings::from_env()?;
    let dependencies = Dependencies::new(&settings).await?;

    let orchestrator = Orchestrator::new(dependencies.consumer, dependencies.loader);
    orchestrator.run().await?;
    Ok(())
}

/// Diagnostics go to stderr; the exit status is the worker's only other
/// user-visible interface.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "vote_worker=info,vote_worker_pipeline=info,vote_worker_repository=info".into()
        }))
        .with_writer(std::io::stderr)
        .init();
}
