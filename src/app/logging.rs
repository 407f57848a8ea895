use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;

/// Where log lines go for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// `<config dir>/insight.log`, used while the TUI owns the terminal.
    File,
}

/// Install the global subscriber at the configured level. `log_level = "off"`
/// installs nothing.
pub fn init(config: &Config, target: LogTarget) -> Result<()> {
    let Some(level) = config.max_log_level()? else {
        return Ok(());
    };

    match target {
        LogTarget::Stderr => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("setting default subscriber failed")?;
        }
        LogTarget::File => {
            let path = config.log_path();
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .context("setting default subscriber failed")?;
        }
    }
    Ok(())
}
