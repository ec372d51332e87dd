use std::fs::File;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "PORTAL_LOG";
const LOG_FILE: &str = "nexus-portal.log";

/// Logs go to a file in the platform state directory; stdout belongs to the
/// terminal UI.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let dirs = ProjectDirs::from("", "", "nexus-portal")
        .ok_or_else(|| color_eyre::eyre::eyre!("no home directory"))?;
    let log_dir = dirs.data_local_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = File::create(log_dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
