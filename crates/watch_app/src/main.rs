mod config;
mod logging;

use anyhow::Context;
use watch_engine::Orchestrator;
use watch_logging::watch_info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;
    logging::initialize(&config.log_path());

    watch_info!(
        "Starting signup watch for {} (storage {:?})",
        config.target_url,
        config.storage_dir
    );
    let orchestrator = Orchestrator::new(config).context("could not set up the watcher")?;
    orchestrator.run().await;
    Ok(())
}
