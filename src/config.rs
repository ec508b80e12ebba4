// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::context::AppContext;
use anyhow::Result;
use serde::Deserialize;
use std::fs;

fn default_reply_prefix() -> String {
    "~\t".to_string()
}

fn default_divider_width() -> usize {
    60
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Prepended to every line of a reply.
    #[serde(default = "default_reply_prefix")]
    pub reply_prefix: String,
    #[serde(default = "default_divider_width")]
    pub divider_width: usize,
    #[serde(default = "default_true")]
    pub show_logo: bool,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        // Match the serde defaults
        Self {
            reply_prefix: default_reply_prefix(),
            divider_width: default_divider_width(),
            show_logo: true,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from disk. A missing file yields the defaults;
    /// an unreadable or malformed file is an error naming the path.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.config_file_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }
}
