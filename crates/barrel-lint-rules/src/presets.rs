//! Policy presets for common configurations.

use barrel_lint_core::ImportRuleBox;

use crate::policy::BarrelPolicy;
use crate::NoBarrelFilesImport;

/// Preset configurations for barrel-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Own-alias imports only, for gradual adoption.
    Minimal,
    /// Own-alias imports and imports of the project's outermost barrel.
    Recommended,
    /// Every folder-root and barrel-file import.
    Strict,
}

impl Preset {
    /// Parses a preset name as written in the config.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "minimal" => Some(Self::Minimal),
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Returns the policy for this preset.
    #[must_use]
    pub fn policy(self) -> BarrelPolicy {
        match self {
            Self::Minimal => BarrelPolicy::new(),
            Self::Recommended => BarrelPolicy::new().main_barrel_only(true),
            Self::Strict => BarrelPolicy::new()
                .folder_root_and_barrel(true)
                .any_barrel(true),
        }
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<ImportRuleBox> {
        vec![Box::new(NoBarrelFilesImport::new().policy(self.policy()))]
    }
}

/// Returns all available rules with default settings.
#[must_use]
pub fn all_rules() -> Vec<ImportRuleBox> {
    vec![Box::new(NoBarrelFilesImport::new())]
}
