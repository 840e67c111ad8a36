/// Logging configuration and initialization
///
/// The dashboard owns the terminal while it runs, so the default target is
/// a rolling JSON file. Console output goes to stderr and is only installed
/// when file logging is turned off.
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, registry::Registry, EnvFilter};

use super::config_loader::LoggingConfig;

const LOG_FILE_PREFIX: &str = "benin-tui.log";

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber described by `config`.
///
/// Returns an error when a subscriber is already installed, which callers
/// embedding the dashboard may ignore.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = env_filter(&config.level);

    match config.log_dir.as_deref().filter(|_| config.enable_file_logging) {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
            Registry::default()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(appender)
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .try_init()?;
        }
        None => {
            Registry::default()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    tracing::debug!(level = %config.level, "logging initialized");
    Ok(())
}

/// Log a menu selection
pub fn log_view_selected(view: &str) {
    tracing::info!(view = view, "view selected");
}
