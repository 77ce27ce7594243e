//! Alias table: maps project aliases to their barrel entry files.
//!
//! The table mirrors a `paths` mapping such as
//! `"@myapp/test" = ["libs/test/src/index.ts"]`. From each entry the
//! resolver derives the project's source root (the entry file's directory)
//! and the barrel base name (the entry file name without its extension).

use serde::Serialize;
use std::collections::HashSet;

use crate::error::ClassifyError;
use crate::utils::paths::{is_under, last_segment, normalize, parent_dir};

/// One validated alias entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    /// Import specifier used by other projects (e.g. `@myapp/test`).
    pub alias: String,
    /// Normalized path of the barrel entry file.
    pub entry_path: String,
}

impl AliasEntry {
    /// Directory containing the entry file.
    #[must_use]
    pub fn source_root_path(&self) -> &str {
        parent_dir(&self.entry_path)
    }

    /// Entry file name without directory and extension.
    #[must_use]
    pub fn barrel_file_base_name(&self) -> &str {
        let file_name = last_segment(&self.entry_path);
        file_name
            .rfind('.')
            .map_or(file_name, |dot| &file_name[..dot])
    }
}

/// Validated alias table, in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `alias -> [entry path]` pairs.
    ///
    /// Entries whose alias or path contains a `*` wildcard are path patterns,
    /// not barrel entry points, and are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MalformedAliasTable`] if an alias is empty or
    /// declared twice, if it does not map to exactly one path, or if that
    /// path does not name a file with an extension.
    pub fn from_paths<I, K, V>(paths: I) -> Result<Self, ClassifyError>
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for (alias, targets) in paths {
            let alias: String = alias.into();
            let targets: Vec<String> = targets.into_iter().map(Into::into).collect();

            if alias.contains('*') || targets.iter().any(|t| t.contains('*')) {
                tracing::debug!(alias = %alias, "skipping wildcard alias");
                continue;
            }
            if alias.is_empty() {
                return Err(ClassifyError::malformed_alias(alias, "alias is empty"));
            }
            if !seen.insert(alias.clone()) {
                return Err(ClassifyError::malformed_alias(alias, "alias declared twice"));
            }

            let [target] = targets.as_slice() else {
                return Err(ClassifyError::malformed_alias(
                    alias,
                    format!("expected exactly one entry path, found {}", targets.len()),
                ));
            };

            let entry_path = normalize(target);
            if !has_extension(last_segment(&entry_path)) {
                return Err(ClassifyError::malformed_alias(
                    alias,
                    format!("entry path {entry_path:?} does not name a file with an extension"),
                ));
            }

            entries.push(AliasEntry { alias, entry_path });
        }

        Ok(Self { entries })
    }

    /// Finds the alias whose entry-file directory is `source_root_path` or
    /// lies below it.
    ///
    /// Containment respects path segments, so `libs/ui` does not claim
    /// `libs/ui-kit`. Returns `Ok(None)` when no alias matches.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MalformedAliasTable`] when more than one alias
    /// matches, which happens when source roots overlap.
    pub fn find_alias_for_source_root(
        &self,
        source_root_path: &str,
    ) -> Result<Option<&str>, ClassifyError> {
        let mut matches = self
            .entries
            .iter()
            .filter(|e| is_under(e.source_root_path(), source_root_path));

        let Some(first) = matches.next() else {
            return Ok(None);
        };

        if let Some(second) = matches.next() {
            return Err(ClassifyError::malformed_alias(
                source_root_path,
                format!(
                    "source root is claimed by both {:?} and {:?}",
                    first.alias, second.alias
                ),
            ));
        }

        Ok(Some(first.alias.as_str()))
    }

    /// Returns the barrel base name declared for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MalformedAliasTable`] if the alias is absent.
    pub fn barrel_file_base_name(&self, alias: &str) -> Result<&str, ClassifyError> {
        self.entry(alias)
            .map(AliasEntry::barrel_file_base_name)
            .ok_or_else(|| ClassifyError::malformed_alias(alias, "alias is not declared"))
    }

    /// Looks up an entry by alias.
    #[must_use]
    pub fn entry(&self, alias: &str) -> Option<&AliasEntry> {
        self.entries.iter().find(|e| e.alias == alias)
    }

    /// Iterates over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    /// Number of usable entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no usable entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn has_extension(file_name: &str) -> bool {
    matches!(file_name.rfind('.'), Some(dot) if dot > 0 && dot + 1 < file_name.len())
}
