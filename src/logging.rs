// File: src/logging.rs
//! File logger bootstrap.
//!
//! Stdout belongs to the conversation, so logs only ever go to
//! `<cache dir>/duke.log`.
use crate::context::AppContext;
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::str::FromStr;

/// Parses a config level name (`info`, `debug`, ...), case-insensitively.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| anyhow::anyhow!("Unsupported log level '{}'", level))
}

/// Installs the global file logger. Fails if the level is unknown, the log
/// file cannot be opened, or a logger is already installed.
pub fn init(ctx: &dyn AppContext, level: &str) -> Result<()> {
    let level = parse_level(level)?;
    let path = ctx.log_file_path()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    let config = ConfigBuilder::new().set_target_level(LevelFilter::Off).build();
    WriteLogger::init(level, config, file)
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    log::info!("Logging to {:?} at level {}", path, level);
    Ok(())
}
