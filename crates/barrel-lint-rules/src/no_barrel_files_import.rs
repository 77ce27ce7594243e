//! Rule to forbid barrel-file imports from inside the same project.
//!
//! # Rationale
//!
//! Code inside a project should import its siblings directly. Going through
//! the project's own alias or its `index` re-export file adds indirection,
//! invites circular imports and defeats tree-shaking.
//!
//! # Configuration
//!
//! - `preset`: `"minimal"`, `"recommended"` or `"strict"` (default: minimal)
//! - `disallow_own_alias`: always on; setting it to `false` is an error
//! - `disallow_folder_root_and_barrel`: report folder imports and every
//!   barrel import (default: false)
//! - `disallow_main_barrel_only`: report imports that climb exactly to the
//!   project's outermost barrel (default: false)
//! - `disallow_any_barrel`: report every barrel import (default: false)

use barrel_lint_core::utils::paths::is_under;
use barrel_lint_core::{
    AliasTable, ClassifyError, ConfigError, FileContext, ImportContext, ImportDecl, ImportRule,
    Location, RuleConfig, Severity, Suggestion, Violation,
};
use tracing::{debug, warn};

use crate::classify::{classify, Classification};
use crate::policy::{BarrelPolicy, ViolationKind};

/// Rule code of the first violation kind (own alias).
pub const CODE: &str = "BRL001";

/// Rule name for no-barrel-files-import.
pub const NAME: &str = "no-barrel-files-import";

/// Barrel base name used when the target project declares no alias.
pub const DEFAULT_BARREL_BASE_NAME: &str = "index";

/// Forbids imports that reach the importing project's own public surface.
#[derive(Debug, Clone)]
pub struct NoBarrelFilesImport {
    /// Which classifications are reported.
    pub policy: BarrelPolicy,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoBarrelFilesImport {
    fn default() -> Self {
        Self::new()
    }
}

impl NoBarrelFilesImport {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: BarrelPolicy::new(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its `[rules.no-barrel-files-import]` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not validate.
    pub fn from_config(config: &RuleConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            policy: BarrelPolicy::from_rule_config(config)?,
            severity: config.severity.unwrap_or(Severity::Error),
        })
    }

    /// Sets the reporting policy.
    #[must_use]
    pub fn policy(mut self, policy: BarrelPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Classifies one import of the file described by `ctx`.
    ///
    /// Returns `Ok(None)` when the file or the import cannot be tied to a
    /// project, or when the target project has no source root.
    ///
    /// # Errors
    ///
    /// Propagates [`ClassifyError`] from classification.
    pub fn classify_import(
        &self,
        ctx: &FileContext<'_>,
        import: &ImportDecl,
    ) -> Result<Option<Classification>, ClassifyError> {
        let Some(source_project) = ctx.source_project.as_deref() else {
            debug!(file = %ctx.path, "file belongs to no project");
            return Ok(None);
        };

        let Some(target_project) = ctx.target_project(import) else {
            debug!(file = %ctx.path, import = %import.path, "import target not resolved");
            return Ok(None);
        };

        let same_project = source_project == target_project;
        let source_root = match ctx.roots.source_root(&target_project) {
            Some(root) => root,
            None if same_project => {
                warn!(project = %target_project, "project has no source root, skipping import");
                return Ok(None);
            }
            None => "",
        };

        if same_project && is_project_tooling_file(ctx, &target_project, source_root) {
            debug!(file = %ctx.path, "file lies outside the project's source root");
            return Ok(None);
        }

        let barrel_base_name = if same_project {
            project_barrel_base_name(ctx.aliases, source_root)?
        } else {
            DEFAULT_BARREL_BASE_NAME
        };

        let import_ctx = ImportContext::new(
            &ctx.path,
            &import.path,
            source_project,
            &target_project,
            source_root,
        );
        classify(&import_ctx, ctx.aliases, barrel_base_name).map(Some)
    }

    fn violation(
        &self,
        ctx: &FileContext<'_>,
        import: &ImportDecl,
        kind: ViolationKind,
    ) -> Violation {
        Violation::new(
            kind.code(),
            NAME,
            self.severity,
            Location::new(ctx.path.clone(), import.line, import.column),
            kind.message(),
        )
        .with_suggestion(Suggestion::new(kind.help()))
        .with_message_id(kind.message_id())
        .with_import_path(import.path.clone())
    }
}

/// Whether the file sits in the project directory but outside its source
/// root, like `jest.config.ts` or `.storybook/preview.ts`.
///
/// A file outside both is left to classification, which reports the
/// disagreement as [`ClassifyError::NotUnderRoot`].
fn is_project_tooling_file(ctx: &FileContext<'_>, project: &str, source_root: &str) -> bool {
    !is_under(&ctx.path, source_root)
        && ctx
            .roots
            .project_root(project)
            .is_some_and(|root| is_under(&ctx.path, root))
}

/// Barrel base name of the project rooted at `source_root`.
fn project_barrel_base_name<'a>(
    aliases: &'a AliasTable,
    source_root: &str,
) -> Result<&'a str, ClassifyError> {
    match aliases.find_alias_for_source_root(source_root)? {
        Some(alias) => aliases.barrel_file_base_name(alias),
        None => Ok(DEFAULT_BARREL_BASE_NAME),
    }
}

impl ImportRule for NoBarrelFilesImport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids importing the current project's alias or barrel files from inside the project"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(
        &self,
        ctx: &FileContext<'_>,
        imports: &[ImportDecl],
    ) -> Result<Vec<Violation>, ClassifyError> {
        let mut violations = Vec::new();

        for import in imports {
            let classification = match self.classify_import(ctx, import) {
                Ok(Some(classification)) => classification,
                Ok(None) => continue,
                Err(e) if !e.is_fatal_for_pass() => {
                    warn!(file = %ctx.path, line = import.line, error = %e, "skipping import");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Some(kind) = self.policy.evaluate(classification) {
                violations.push(self.violation(ctx, import, kind));
            }
        }

        Ok(violations)
    }
}
