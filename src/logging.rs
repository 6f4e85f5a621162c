//! Logging initialization for stepform.
//!
//! While the wizard owns the terminal, logs go to
//! `<state>/logs/stepform-{datetime}.log`; otherwise to stderr.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Keeps the file writer alive; drop it last so buffered lines are flushed
pub struct LoggingHandle {
    pub _guard: Option<WorkerGuard>,

    /// Set when logging to a file
    pub log_file_path: Option<PathBuf>,
}

/// Where log lines end up
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogDestination {
    Stderr,
    File { dir: PathBuf, file_name: String },
}

impl LogDestination {
    fn choose(config: &Config, is_tui_mode: bool) -> Self {
        // stderr would draw over the wizard
        if is_tui_mode && config.logging.to_file {
            LogDestination::File {
                dir: config.logs_path(),
                file_name: log_filename(),
            }
        } else {
            LogDestination::Stderr
        }
    }
}

fn log_filename() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("stepform-{}.log", timestamp)
}

/// `RUST_LOG` wins, then `--debug`, then the configured level
fn filter_directive(config: &Config, debug_override: bool) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| effective_level(config, debug_override))
}

fn effective_level(config: &Config, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    }
}

/// Install the global subscriber. Keep the returned handle alive for the
/// whole run.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = EnvFilter::try_new(filter_directive(config, debug_override))
        .context("Invalid log level")?;

    let (writer, handle, ansi) = match LogDestination::choose(config, is_tui_mode) {
        LogDestination::File { dir, file_name } => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, &file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let handle = LoggingHandle {
                _guard: Some(guard),
                log_file_path: Some(dir.join(file_name)),
            };
            (BoxMakeWriter::new(non_blocking), handle, false)
        }
        LogDestination::Stderr => {
            let handle = LoggingHandle {
                _guard: None,
                log_file_path: None,
            };
            (BoxMakeWriter::new(std::io::stderr), handle, true)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .init();

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filename_format() {
        let name = log_filename();
        assert!(name.starts_with("stepform-"));
        assert!(name.ends_with("Z.log"));
    }

    #[test]
    fn test_debug_flag_overrides_configured_level() {
        let mut config = Config::default();
        config.logging.level = "warn".to_string();

        assert_eq!(effective_level(&config, false), "warn");
        assert_eq!(effective_level(&config, true), "debug");
    }

    #[test]
    fn test_wizard_logs_to_file_under_state() {
        let config = Config::default();
        match LogDestination::choose(&config, true) {
            LogDestination::File { dir, file_name } => {
                assert_eq!(dir, config.logs_path());
                assert!(file_name.starts_with("stepform-"));
            }
            LogDestination::Stderr => panic!("expected a log file"),
        }
    }

    #[test]
    fn test_cli_and_disabled_file_log_to_stderr() {
        let mut config = Config::default();
        assert_eq!(LogDestination::choose(&config, false), LogDestination::Stderr);

        config.logging.to_file = false;
        assert_eq!(LogDestination::choose(&config, true), LogDestination::Stderr);
    }
}
