//! Error kinds raised while classifying imports.

use miette::Diagnostic;

/// Errors raised by path analysis, alias resolution and classification.
///
/// The kinds differ in blast radius: [`ClassifyError::InvalidArgument`] only
/// invalidates the import it was raised for, the other two invalidate the
/// whole analysis pass. See [`ClassifyError::is_fatal_for_pass`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ClassifyError {
    /// The import literal cannot be analyzed (e.g. it is empty).
    #[error("invalid import path {import_path:?}: {reason}")]
    #[diagnostic(
        code(barrel_lint::invalid_argument),
        help("the import is skipped; fix the import statement")
    )]
    InvalidArgument {
        /// The offending import literal.
        import_path: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A source file does not live under the source root of its project.
    #[error("{file} is not under source root {source_root}")]
    #[diagnostic(
        code(barrel_lint::not_under_root),
        help("the project graph and the workspace source roots disagree")
    )]
    NotUnderRoot {
        /// The source file path.
        file: String,
        /// The source root it was expected under.
        source_root: String,
    },

    /// The alias table is missing an alias or has an unusable entry.
    #[error("malformed alias table entry {alias:?}: {reason}")]
    #[diagnostic(
        code(barrel_lint::malformed_alias_table),
        help("every alias must map to exactly one entry file, and source roots must not overlap")
    )]
    MalformedAliasTable {
        /// The alias involved (may be a source root when no alias matched).
        alias: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl ClassifyError {
    /// Creates a [`ClassifyError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(import_path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            import_path: import_path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`ClassifyError::MalformedAliasTable`].
    #[must_use]
    pub fn malformed_alias(alias: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedAliasTable {
            alias: alias.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` when the error must abort the whole analysis pass
    /// rather than just the import that raised it.
    #[must_use]
    pub fn is_fatal_for_pass(&self) -> bool {
        !matches!(self, Self::InvalidArgument { .. })
    }
}
