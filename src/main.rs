use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use fidelity::host::{Host, HostBuilder};
use fidelity::infrastructure::{AppConfig, CliArgs, StorageManager};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();

    let mut config = StorageManager::new()?.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    Ok(config)
}

fn create_host() -> Result<Host> {
    let config = load_config()?;

    init_logging(&config)?;

    info!(version = fidelity::VERSION, origin = %config.host.origin, "Starting Fidelity");

    let host = HostBuilder::create_default(&config)?
        .add_root_component("#app", "App")
        .add_root_component("head::after", "HeadOutlet")
        .build()?;

    Ok(host)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let host = create_host()?;

    host.run().await
}
