//! Context types for rule execution.
//!
//! The traits here are the seams to the collaborators that own project
//! topology. [`crate::Workspace`] implements both; hosts with their own
//! project graph can supply other implementations.

use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::utils::paths::normalize;
use crate::workspace::Workspace;

/// Maps files and imports to project names.
pub trait ProjectLocator {
    /// Name of the project owning `source_file`.
    fn source_project(&self, source_file: &str) -> Option<String>;

    /// Name of the project an import resolves to, if any.
    fn target_project(&self, source_file: &str, import_path: &str) -> Option<String>;
}

/// Workspace metadata: where each project keeps its sources.
pub trait SourceRoots {
    /// Declared source root of `project`.
    fn source_root(&self, project: &str) -> Option<&str>;

    /// Project directory of `project`, holding its source root as well as
    /// tooling files (test setup, storybook, bundler config).
    fn project_root(&self, _project: &str) -> Option<&str> {
        None
    }
}

/// One import declaration, as found by the host's syntax tree walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDecl {
    /// Raw import literal (e.g. `"../index"`).
    pub path: String,
    /// Line number (1-indexed).
    #[serde(default = "default_position")]
    pub line: usize,
    /// Column number (1-indexed).
    #[serde(default = "default_position")]
    pub column: usize,
    /// Target project resolved by the host; overrides the locator when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_project: Option<String>,
}

impl ImportDecl {
    /// Creates an import declaration without a pre-resolved target.
    #[must_use]
    pub fn new(path: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            path: path.into(),
            line,
            column,
            target_project: None,
        }
    }

    /// Pins the target project instead of asking the locator.
    #[must_use]
    pub fn with_target_project(mut self, project: impl Into<String>) -> Self {
        self.target_project = Some(project.into());
        self
    }
}

fn default_position() -> usize {
    1
}

/// All imports of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceImports {
    /// File path relative to the workspace root.
    pub file: String,
    /// Import declarations in source order.
    #[serde(default)]
    pub imports: Vec<ImportDecl>,
}

/// Everything a rule needs to judge the imports of one file.
///
/// Built once per file; the collaborators behind it are shared and
/// read-only for the whole run.
pub struct FileContext<'a> {
    /// Normalized path of the file, relative to the workspace root.
    pub path: String,
    /// Project owning the file, if any.
    pub source_project: Option<String>,
    /// Project graph.
    pub locator: &'a dyn ProjectLocator,
    /// Workspace metadata.
    pub roots: &'a dyn SourceRoots,
    /// Alias table.
    pub aliases: &'a AliasTable,
}

impl<'a> FileContext<'a> {
    /// Creates a context backed entirely by `workspace`.
    #[must_use]
    pub fn new(path: &str, workspace: &'a Workspace) -> Self {
        Self::with_collaborators(path, workspace, workspace, workspace.aliases())
    }

    /// Creates a context from separate collaborators.
    #[must_use]
    pub fn with_collaborators(
        path: &str,
        locator: &'a dyn ProjectLocator,
        roots: &'a dyn SourceRoots,
        aliases: &'a AliasTable,
    ) -> Self {
        let path = normalize(path);
        let source_project = locator.source_project(&path);
        Self {
            path,
            source_project,
            locator,
            roots,
            aliases,
        }
    }

    /// Resolves the target project of an import.
    #[must_use]
    pub fn target_project(&self, import: &ImportDecl) -> Option<String> {
        import
            .target_project
            .clone()
            .or_else(|| self.locator.target_project(&self.path, &import.path))
    }
}

/// The unit of classification: one import statement in one file.
///
/// Built fresh per import and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportContext<'a> {
    /// Importing file, relative to the workspace root.
    pub source_file_path: &'a str,
    /// Raw import literal.
    pub import_path: &'a str,
    /// Project owning the importing file.
    pub source_project: &'a str,
    /// Project the import resolves to.
    pub target_project: &'a str,
    /// Source root of the target project.
    pub target_source_root: &'a str,
}

impl<'a> ImportContext<'a> {
    /// Creates a new import context.
    #[must_use]
    pub fn new(
        source_file_path: &'a str,
        import_path: &'a str,
        source_project: &'a str,
        target_project: &'a str,
        target_source_root: &'a str,
    ) -> Self {
        Self {
            source_file_path,
            import_path,
            source_project,
            target_project,
            target_source_root,
        }
    }

    /// Returns `true` when the import stays inside the importing project.
    #[must_use]
    pub fn is_same_project(&self) -> bool {
        self.source_project == self.target_project
    }
}
