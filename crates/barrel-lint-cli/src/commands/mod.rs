//! Subcommand implementations.

pub mod check;
pub mod classify;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use barrel_lint_core::Config;

use crate::config_resolver::ConfigSource;

/// Loads the configuration the resolver pointed at.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        tracing::debug!("No config file found, using defaults");
        return Ok(Config::default());
    };

    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }

    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
