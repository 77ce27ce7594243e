//! Workspace model: projects, their source roots and the alias table.
//!
//! [`Workspace`] is the default provider for the collaborator traits in
//! [`crate::context`]. It is built once per run and only read afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::alias::AliasTable;
use crate::config::{Config, ConfigError};
use crate::context::{ProjectLocator, SourceRoots};
use crate::utils::paths::{is_under, normalize, resolve_relative};

/// A project of the monorepo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name.
    pub name: String,
    /// Project directory; every file of the project lives below it.
    pub root: String,
    /// Directory holding the project's own modules.
    pub source_root: String,
}

impl Project {
    /// Creates a project with normalized paths.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        root: impl AsRef<str>,
        source_root: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.into(),
            root: normalize(root.as_ref()),
            source_root: normalize(source_root.as_ref()),
        }
    }
}

/// Immutable snapshot of the workspace for one analysis run.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    projects: Vec<Project>,
    aliases: AliasTable,
}

impl Workspace {
    /// Creates a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if two projects share a name.
    pub fn new(projects: Vec<Project>, aliases: AliasTable) -> Result<Self, ConfigError> {
        let mut names = HashSet::new();
        for project in &projects {
            if !names.insert(project.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "project '{}' is declared twice",
                    project.name
                )));
            }
        }

        let projects = projects
            .into_iter()
            .map(|p| Project::new(p.name, p.root, p.source_root))
            .collect();

        Ok(Self { projects, aliases })
    }

    /// Builds the workspace from the `[[projects]]` and `[aliases]` sections.
    ///
    /// # Errors
    ///
    /// Returns an error if projects collide or the alias table is malformed.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let aliases = AliasTable::from_paths(
            config
                .aliases
                .iter()
                .map(|(alias, paths)| (alias.clone(), paths.clone())),
        )?;
        Self::new(config.projects.clone(), aliases)
    }

    /// All projects.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The alias table.
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Looks up a project by name.
    #[must_use]
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Finds the project owning `path`, preferring the deepest root.
    #[must_use]
    pub fn project_for_path(&self, path: &str) -> Option<&Project> {
        self.projects
            .iter()
            .filter(|p| is_under(path, &p.root))
            .max_by_key(|p| p.root.len())
    }
}

impl SourceRoots for Workspace {
    fn source_root(&self, project: &str) -> Option<&str> {
        self.project(project).map(|p| p.source_root.as_str())
    }

    fn project_root(&self, project: &str) -> Option<&str> {
        self.project(project).map(|p| p.root.as_str())
    }
}

impl ProjectLocator for Workspace {
    fn source_project(&self, source_file: &str) -> Option<String> {
        self.project_for_path(source_file).map(|p| p.name.clone())
    }

    fn target_project(&self, source_file: &str, import_path: &str) -> Option<String> {
        // Longest alias first so `@scope/lib/testing` beats `@scope/lib`.
        let by_alias = self
            .aliases
            .iter()
            .filter(|e| {
                import_path == e.alias
                    || import_path
                        .strip_prefix(e.alias.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            })
            .max_by_key(|e| e.alias.len());

        if let Some(entry) = by_alias {
            return self
                .project_for_path(&entry.entry_path)
                .map(|p| p.name.clone());
        }

        let resolved = resolve_relative(source_file, import_path)?;
        self.project_for_path(&resolved).map(|p| p.name.clone())
    }
}
