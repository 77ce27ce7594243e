//! Import classification.
//!
//! Decides, for one import statement, whether it reaches its own project's
//! public surface. The checks run in a fixed order; each one refines the
//! previous, so the first match wins:
//!
//! 1. different project: [`Classification::NotSameProject`]
//! 2. literal equals the project's alias: [`Classification::UsesOwnAlias`]
//! 3. bare directory import: [`Classification::FromFolderRoot`]
//! 4. final segment does not name the barrel: [`Classification::Allowed`]
//! 5. otherwise [`Classification::FromBarrelFile`], with `nesting_match`
//!    telling whether the `../` count equals the file's depth below the
//!    source root.

use barrel_lint_core::utils::paths::{
    count_directory_segments, count_parent_traversals, is_bare_directory_import,
    is_index_like_import, relative_to_source_root,
};
use barrel_lint_core::{AliasTable, ClassifyError, ImportContext};
use tracing::debug;

/// Outcome of classifying one import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The import leaves the importing project.
    NotSameProject,
    /// The import uses the importing project's own public alias.
    UsesOwnAlias,
    /// The import names a directory and so resolves to its barrel file.
    FromFolderRoot,
    /// The import names a barrel file of the importing project.
    FromBarrelFile {
        /// `../` count equals the importing file's depth below the source root.
        nesting_match: bool,
    },
    /// The import is not a barrel access.
    Allowed,
}

impl Classification {
    /// Stable kebab-case key, usable as a message selector.
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Self::NotSameProject => "not-same-project",
            Self::UsesOwnAlias => "uses-own-alias",
            Self::FromFolderRoot => "from-folder-root",
            Self::FromBarrelFile { .. } => "from-barrel-file",
            Self::Allowed => "allowed",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FromBarrelFile { nesting_match } => {
                write!(f, "{} (nesting match: {nesting_match})", self.kind())
            }
            other => f.write_str(other.kind()),
        }
    }
}

/// Classifies one import.
///
/// `barrel_base_name` is the entry file name of the target project without
/// extension (usually `index`).
///
/// # Errors
///
/// - [`ClassifyError::MalformedAliasTable`] if the target's source root is
///   claimed by several aliases.
/// - [`ClassifyError::InvalidArgument`] for an empty import literal.
/// - [`ClassifyError::NotUnderRoot`] if the importing file is not under the
///   target source root although both sit in the same project.
pub fn classify(
    ctx: &ImportContext<'_>,
    aliases: &AliasTable,
    barrel_base_name: &str,
) -> Result<Classification, ClassifyError> {
    let classification = classify_inner(ctx, aliases, barrel_base_name)?;
    debug!(
        file = ctx.source_file_path,
        import = ctx.import_path,
        %classification,
        "classified import"
    );
    Ok(classification)
}

fn classify_inner(
    ctx: &ImportContext<'_>,
    aliases: &AliasTable,
    barrel_base_name: &str,
) -> Result<Classification, ClassifyError> {
    if !ctx.is_same_project() {
        return Ok(Classification::NotSameProject);
    }

    let own_alias = aliases.find_alias_for_source_root(ctx.target_source_root)?;
    if own_alias == Some(ctx.import_path) {
        return Ok(Classification::UsesOwnAlias);
    }

    if is_bare_directory_import(ctx.import_path)? {
        return Ok(Classification::FromFolderRoot);
    }

    if !is_index_like_import(ctx.import_path, barrel_base_name) {
        return Ok(Classification::Allowed);
    }

    let relative = relative_to_source_root(ctx.source_file_path, ctx.target_source_root)?;
    let file_depth = count_directory_segments(relative);
    let import_depth = count_parent_traversals(ctx.import_path);

    Ok(Classification::FromBarrelFile {
        nesting_match: import_depth == file_depth,
    })
}
