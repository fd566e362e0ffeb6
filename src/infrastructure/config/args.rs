use super::app_config::{LogLevel, StorageBackend};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fidelity",
    version,
    about = "Client host for the Fidelity loyalty and CRM application",
    long_about = None
)]
/// Command line arguments.
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Origin the application is served from.
    #[arg(long, env = "FIDELITY_ORIGIN", value_name = "URL")]
    pub origin: Option<String>,

    /// Host document (HTML) providing the mount points.
    #[arg(long, value_name = "PATH")]
    pub document: Option<PathBuf>,

    /// Local storage backend.
    #[arg(long, value_enum)]
    pub storage: Option<StorageBackend>,

    /// Local storage file path.
    #[arg(long, value_name = "PATH")]
    pub storage_path: Option<PathBuf>,

    /// Show notifications on the desktop.
    #[arg(long)]
    pub desktop_notifications: Option<bool>,
}
