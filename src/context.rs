// File: ./src/context.rs
//! Locations of the two files duke touches: `config.toml` and `duke.log`.
//!
//! Directories are resolved once, when the context is built. They are only
//! created when a path is requested.
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "duke.log";

pub trait AppContext: std::fmt::Debug {
    fn config_file_path(&self) -> Result<PathBuf>;
    fn log_file_path(&self) -> Result<PathBuf>;
}

#[derive(Clone, Debug)]
pub struct StandardContext {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl StandardContext {
    /// `Some(root)` comes from `--root`; otherwise the platform's config and
    /// cache directories are used.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = root {
            return Ok(Self::rooted(root));
        }
        let dirs = ProjectDirs::from("com", "duke", "duke")
            .context("Could not determine a home directory")?;
        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            log_dir: dirs.cache_dir().to_path_buf(),
        })
    }

    /// Keeps everything under `root`: `root/config/` and `root/cache/`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_dir: root.join("config"),
            log_dir: root.join("cache"),
        }
    }
}

fn file_in(dir: &Path, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {:?}", dir))?;
    Ok(dir.join(name))
}

impl AppContext for StandardContext {
    fn config_file_path(&self) -> Result<PathBuf> {
        file_in(&self.config_dir, CONFIG_FILE_NAME)
    }

    fn log_file_path(&self) -> Result<PathBuf> {
        file_in(&self.log_dir, LOG_FILE_NAME)
    }
}
