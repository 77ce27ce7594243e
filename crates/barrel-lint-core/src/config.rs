//! Configuration types for barrel-lint.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::error::ClassifyError;
use crate::types::Severity;
use crate::workspace::Project;

/// Top-level configuration for barrel-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for failing a run (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Projects of the workspace.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Alias table: alias -> one-element list holding the barrel entry file.
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Severity at or above which a run fails.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the configuration of a rule, or an empty one.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> RuleConfig {
        self.rules.get(rule_name).cloned().unwrap_or_default()
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns of source files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a boolean option.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the option is set to a
    /// non-boolean value.
    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        match self.options.get(key) {
            None => Ok(default),
            Some(value) => value.as_bool().ok_or_else(|| {
                ConfigError::Validation(format!("option '{key}' must be a boolean, got {value}"))
            }),
        }
    }

    /// Rejects any option key not listed in `known`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first unknown key
    /// (in sorted order).
    pub fn deny_unknown_options(&self, known: &[&str]) -> Result<(), ConfigError> {
        let mut keys: Vec<&String> = self.options.keys().collect();
        keys.sort();
        match keys.into_iter().find(|k| !known.contains(&k.as_str())) {
            Some(key) => Err(ConfigError::Validation(format!(
                "unknown option '{key}' (expected one of: {})",
                known.join(", ")
            ))),
            None => Ok(()),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config is structurally invalid.
    #[error("Invalid config: {0}")]
    Validation(String),

    /// The `[aliases]` table cannot be used.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Alias(#[from] ClassifyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert!(config.projects.is_empty());
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.is_rule_enabled("no-barrel-files-import"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
fail_on = "warning"

[analyzer]
exclude = ["**/*.spec.ts"]

[[projects]]
name = "test"
root = "libs/test"
source_root = "libs/test/src"

[aliases]
"@myapp/test" = ["libs/test/src/index.ts"]

[rules.no-barrel-files-import]
severity = "warning"
disallow_folder_root_and_barrel = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.fail_on(), Severity::Warning);
        assert_eq!(config.analyzer.exclude, vec!["**/*.spec.ts"]);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].source_root, "libs/test/src");
        assert_eq!(
            config.aliases.get("@myapp/test"),
            Some(&vec!["libs/test/src/index.ts".to_string()])
        );
        assert_eq!(
            config.rule_severity("no-barrel-files-import"),
            Some(Severity::Warning)
        );

        let rule = config.rule_config("no-barrel-files-import");
        assert!(rule
            .get_bool("disallow_folder_root_and_barrel", false)
            .unwrap());
        assert!(!rule.get_bool("disallow_any_barrel", false).unwrap());
    }

    #[test]
    fn test_disabled_rule() {
        let config = Config::parse(
            r#"
[rules.no-barrel-files-import]
enabled = false
"#,
        )
        .unwrap();
        assert!(!config.is_rule_enabled("no-barrel-files-import"));
    }

    #[test]
    fn test_non_boolean_option_is_rejected() {
        let config = Config::parse(
            r#"
[rules.no-barrel-files-import]
disallow_any_barrel = "yes"
"#,
        )
        .unwrap();
        let err = config
            .rule_config("no-barrel-files-import")
            .get_bool("disallow_any_barrel", false)
            .unwrap_err();
        assert!(err.to_string().contains("must be a boolean"));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let config = Config::parse(
            r#"
[rules.no-barrel-files-import]
disable_import_from_parent = true
"#,
        )
        .unwrap();
        let err = config
            .rule_config("no-barrel-files-import")
            .deny_unknown_options(&["disallow_any_barrel"])
            .unwrap_err();
        assert!(err.to_string().contains("disable_import_from_parent"));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("fail_on = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
