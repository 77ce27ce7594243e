//! Path utilities for import analysis.
//!
//! Everything here is lexical: paths are `/`-separated strings and nothing
//! touches the file system.

use crate::error::ClassifyError;

/// Returns `true` when the import names a directory rather than a file.
///
/// That is the literal `"."`, or any literal ending in `/`. Such an import
/// resolves to the directory's entry file.
///
/// # Errors
///
/// Returns [`ClassifyError::InvalidArgument`] for an empty literal.
///
/// # Example
///
/// ```
/// use barrel_lint_core::utils::paths::is_bare_directory_import;
///
/// assert!(is_bare_directory_import(".").unwrap());
/// assert!(is_bare_directory_import("../shared/").unwrap());
/// assert!(!is_bare_directory_import("./index").unwrap());
/// ```
pub fn is_bare_directory_import(import_path: &str) -> Result<bool, ClassifyError> {
    if import_path.is_empty() {
        return Err(ClassifyError::invalid_argument(
            import_path,
            "import path is empty",
        ));
    }
    Ok(import_path == "." || import_path.ends_with('/'))
}

/// Returns `true` when the final segment of the import contains the barrel
/// base name.
///
/// Matching is a case-sensitive substring test, so `index.test` and
/// `my-index` both count as index-like for `index`.
#[must_use]
pub fn is_index_like_import(import_path: &str, barrel_base_name: &str) -> bool {
    last_segment(import_path).contains(barrel_base_name)
}

/// Extracts the substring after the last `/`, or the whole path without one.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Counts non-overlapping occurrences of `../` in an import literal.
#[must_use]
pub fn count_parent_traversals(import_path: &str) -> usize {
    import_path.matches("../").count()
}

/// Counts the `/`-separated segments of a root-relative path.
///
/// The file name counts as a segment, so a file sitting directly in the
/// source root has depth 1. Empty and `.` segments are ignored.
#[must_use]
pub fn count_directory_segments(path: &str) -> usize {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .count()
}

/// Strips `source_root` from the front of `file`.
///
/// The prefix must end on a segment boundary: `libs/a/srcx/main.ts` is not
/// under `libs/a/src`.
///
/// # Errors
///
/// Returns [`ClassifyError::NotUnderRoot`] if `file` is not under `source_root`.
pub fn relative_to_source_root<'a>(
    file: &'a str,
    source_root: &str,
) -> Result<&'a str, ClassifyError> {
    let root = source_root.trim_end_matches('/');
    if root.is_empty() {
        return Ok(file.trim_start_matches('/'));
    }

    match file.strip_prefix(root) {
        Some("") => Ok(""),
        Some(rest) if rest.starts_with('/') => Ok(&rest[1..]),
        _ => Err(ClassifyError::NotUnderRoot {
            file: file.to_string(),
            source_root: source_root.to_string(),
        }),
    }
}

/// Checks whether `path` equals `prefix` or lies below it.
#[must_use]
pub fn is_under(path: &str, prefix: &str) -> bool {
    relative_to_source_root(path, prefix).is_ok()
}

/// Normalizes a workspace path: `\` becomes `/`, leading `./` and trailing
/// `/` are removed.
#[must_use]
pub fn normalize(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    while let Some(rest) = normalized.strip_prefix("./") {
        normalized = rest.to_string();
    }
    let trimmed = normalized.trim_end_matches('/');
    trimmed.to_string()
}

/// Returns the directory part of a file path (`""` for a bare file name).
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    path.rfind('/').map_or("", |idx| &path[..idx])
}

/// Lexically resolves a relative import against the importing file.
///
/// `.` segments are dropped and `..` pops a directory. Returns `None` when
/// the import climbs above the workspace root or is not relative.
///
/// # Example
///
/// ```
/// use barrel_lint_core::utils::paths::resolve_relative;
///
/// assert_eq!(
///     resolve_relative("libs/test/src/component/component.ts", "../../index").as_deref(),
///     Some("libs/test/src/index"),
/// );
/// ```
#[must_use]
pub fn resolve_relative(source_file: &str, import_path: &str) -> Option<String> {
    if !import_path.starts_with('.') {
        return None;
    }

    let mut parts: Vec<&str> = parent_dir(source_file)
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    for segment in import_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            other => parts.push(other),
        }
    }

    Some(parts.join("/"))
}
