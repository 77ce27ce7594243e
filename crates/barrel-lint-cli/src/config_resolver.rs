//! Configuration file resolution with global fallback.
//!
//! Resolution order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `barrel-lint.toml` or `.barrel-lint.toml` in the start directory or
//!    the nearest ancestor holding one (the monorepo root)
//! 3. `~/.barrel-lint/config.toml` (global fallback)
//! 4. No config found → defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found at the workspace root.
    Workspace(PathBuf),
    /// Loaded from the global config directory (`~/.barrel-lint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Workspace(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

const WORKSPACE_CONFIG_NAMES: &[&str] = &["barrel-lint.toml", ".barrel-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path starting from `start_dir`.
#[must_use]
pub fn resolve(start_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    let start = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());
    resolve_inner(&start, explicit, global_config_dir())
}

/// Takes `global_dir` as a parameter so tests need not touch env vars.
fn resolve_inner(start_dir: &Path, explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_workspace_config(start_dir) {
        tracing::debug!("Found workspace config: {}", found.display());
        return ConfigSource::Workspace(found);
    }

    let global = global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file());
    if let Some(candidate) = global {
        tracing::debug!("Found global config: {}", candidate.display());
        return ConfigSource::Global(candidate);
    }

    ConfigSource::Default
}

/// Nearest config file in `start_dir` or one of its ancestors.
fn find_workspace_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        WORKSPACE_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the global config directory path.
///
/// Resolution: `$BARREL_LINT_CONFIG_DIR` > `~/.barrel-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("BARREL_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".barrel-lint"))
}
