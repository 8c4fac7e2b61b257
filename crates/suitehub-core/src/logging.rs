//! Logging configuration using tracing
//!
//! The dashboard owns the terminal, so logs always go to a file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "SUITEHUB_LOG";

const LOG_FILE_NAME: &str = "suitehub.log";
const DEFAULT_FILTER: &str = "suitehub=info,suite_hub=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/suite-hub/logs/`
/// Log level is controlled by `SUITEHUB_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SUITEHUB_LOG=debug suitehub
/// SUITEHUB_LOG=suitehub_app=trace suitehub --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Suite Hub starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("suite-hub").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_under_suite_hub_dir() {
        let path = get_current_log_file().unwrap();
        assert!(path.ends_with("suite-hub/logs/suitehub.log"));
    }
}
