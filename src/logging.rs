use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::model::config::LogConfig;

/// Filter from RUST_LOG, falling back to the configured level
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Logging for the TUI. The terminal belongs to the UI, so events only go to
/// a file; with no file configured nothing is installed.
pub fn init_tui_logging(
    config: &LogConfig,
    file_override: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = file_override.or(config.file.as_deref()) else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(())
}

/// Logging for headless commands: the log file when one is set, otherwise
/// warnings and up on stderr (RUST_LOG still wins)
pub fn init_cli_logging(
    config: &LogConfig,
    file_override: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if file_override.is_some() || config.file.is_some() {
        return init_tui_logging(config, file_override);
    }
    tracing_subscriber::registry()
        .with(env_filter("warn"))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
