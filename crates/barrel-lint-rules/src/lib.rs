//! # barrel-lint-rules
//!
//! Built-in import rules for barrel-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | BRL001 | `no-barrel-files-import` | Forbids importing the current project's own alias |
//! | BRL002 | `no-barrel-files-import` | Forbids folder imports inside the project |
//! | BRL003 | `no-barrel-files-import` | Forbids barrel-file imports inside the project |
//!
//! BRL002 and BRL003 are only reported when enabled through the rule's
//! options or a preset.
//!
//! ## Usage
//!
//! ```ignore
//! use barrel_lint_core::Analyzer;
//! use barrel_lint_rules::{BarrelPolicy, NoBarrelFilesImport};
//!
//! let analyzer = Analyzer::builder()
//!     .config(config)
//!     .rule(NoBarrelFilesImport::new().policy(BarrelPolicy::new().any_barrel(true)))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod no_barrel_files_import;
mod policy;
mod presets;

pub use barrel_lint_core::{ImportRule, Severity, Violation};
pub use classify::{classify, Classification};
pub use no_barrel_files_import::{NoBarrelFilesImport, DEFAULT_BARREL_BASE_NAME, NAME};
pub use policy::{BarrelPolicy, ViolationKind, OPTION_KEYS};
pub use presets::{all_rules, Preset};

use barrel_lint_core::{Config, ConfigError, ImportRuleBox};

/// Builds the configured rules.
///
/// # Errors
///
/// Returns an error if a rule's options do not validate.
pub fn rules_from_config(config: &Config) -> Result<Vec<ImportRuleBox>, ConfigError> {
    let rule = NoBarrelFilesImport::from_config(&config.rule_config(NAME))?;
    Ok(vec![Box::new(rule)])
}
