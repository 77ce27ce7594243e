//! Violation policy: which classifications are reported.

use barrel_lint_core::{ConfigError, RuleConfig};

use crate::classify::Classification;
use crate::presets::Preset;

/// Option keys accepted under `[rules.no-barrel-files-import]`.
pub const OPTION_KEYS: &[&str] = &[
    "preset",
    "disallow_own_alias",
    "disallow_folder_root_and_barrel",
    "disallow_main_barrel_only",
    "disallow_any_barrel",
];

/// Reporting switches for barrel accesses.
///
/// Own-alias imports are always reported and have no switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarrelPolicy {
    /// Report folder-root imports and every barrel-file import.
    pub disallow_folder_root_and_barrel: bool,
    /// Report barrel-file imports whose depth matches the importing file's
    /// depth, i.e. imports of the project's outermost barrel.
    pub disallow_main_barrel_only: bool,
    /// Report every barrel-file import.
    pub disallow_any_barrel: bool,
}

/// What a reported import violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Import through the project's own alias.
    OwnAlias,
    /// Import of a directory, hence of its barrel.
    FolderRoot,
    /// Import of a barrel file.
    BarrelFile,
}

impl ViolationKind {
    /// All kinds, in code order.
    pub const ALL: [Self; 3] = [Self::OwnAlias, Self::FolderRoot, Self::BarrelFile];

    /// Diagnostic code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::OwnAlias => "BRL001",
            Self::FolderRoot => "BRL002",
            Self::BarrelFile => "BRL003",
        }
    }

    /// Message selector key, equal to the classification kind it reports.
    #[must_use]
    pub fn message_id(self) -> &'static str {
        match self {
            Self::OwnAlias => Classification::UsesOwnAlias.kind(),
            Self::FolderRoot => Classification::FromFolderRoot.kind(),
            Self::BarrelFile => Classification::FromBarrelFile {
                nesting_match: false,
            }
            .kind(),
        }
    }

    /// Default message text.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::OwnAlias => "Import using current project alias is not allowed.",
            Self::FolderRoot => {
                "Import of a folder resolves to its barrel file, which is not allowed inside the project."
            }
            Self::BarrelFile => {
                "Import from barrel file located in current or parent directory is not allowed."
            }
        }
    }

    /// How to fix it.
    #[must_use]
    pub fn help(self) -> &'static str {
        match self {
            Self::OwnAlias => "import the module by its relative path instead of the project alias",
            Self::FolderRoot => "import the module file directly instead of its folder",
            Self::BarrelFile => "import the module that defines the symbol instead of the barrel file",
        }
    }
}

impl BarrelPolicy {
    /// Creates a policy that reports own-alias imports only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the policy from rule options.
    ///
    /// A `preset` sets the starting switches; explicit switches override it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for unknown keys, non-boolean
    /// switches, an unknown preset, or `disallow_own_alias = false`.
    pub fn from_rule_config(config: &RuleConfig) -> Result<Self, ConfigError> {
        config.deny_unknown_options(OPTION_KEYS)?;

        let base = match config.options.get("preset") {
            None => Self::default(),
            Some(value) => {
                let name = value.as_str().ok_or_else(|| {
                    ConfigError::Validation(format!("option 'preset' must be a string, got {value}"))
                })?;
                Preset::from_name(name)
                    .ok_or_else(|| ConfigError::Validation(format!("unknown preset '{name}'")))?
                    .policy()
            }
        };

        if !config.get_bool("disallow_own_alias", true)? {
            return Err(ConfigError::Validation(
                "disallow_own_alias cannot be disabled".to_string(),
            ));
        }

        Ok(Self {
            disallow_folder_root_and_barrel: config.get_bool(
                "disallow_folder_root_and_barrel",
                base.disallow_folder_root_and_barrel,
            )?,
            disallow_main_barrel_only: config
                .get_bool("disallow_main_barrel_only", base.disallow_main_barrel_only)?,
            disallow_any_barrel: config.get_bool("disallow_any_barrel", base.disallow_any_barrel)?,
        })
    }

    /// Sets `disallow_folder_root_and_barrel`.
    #[must_use]
    pub fn folder_root_and_barrel(mut self, disallow: bool) -> Self {
        self.disallow_folder_root_and_barrel = disallow;
        self
    }

    /// Sets `disallow_main_barrel_only`.
    #[must_use]
    pub fn main_barrel_only(mut self, disallow: bool) -> Self {
        self.disallow_main_barrel_only = disallow;
        self
    }

    /// Sets `disallow_any_barrel`.
    #[must_use]
    pub fn any_barrel(mut self, disallow: bool) -> Self {
        self.disallow_any_barrel = disallow;
        self
    }

    /// Decides whether a classification is reported, and as what.
    #[must_use]
    pub fn evaluate(&self, classification: Classification) -> Option<ViolationKind> {
        match classification {
            Classification::UsesOwnAlias => Some(ViolationKind::OwnAlias),
            Classification::FromFolderRoot if self.disallow_folder_root_and_barrel => {
                Some(ViolationKind::FolderRoot)
            }
            Classification::FromBarrelFile { nesting_match }
                if self.disallow_folder_root_and_barrel
                    || self.disallow_any_barrel
                    || (self.disallow_main_barrel_only && nesting_match) =>
            {
                Some(ViolationKind::BarrelFile)
            }
            _ => None,
        }
    }
}
