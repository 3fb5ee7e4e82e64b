//! Path utilities
//!
//! Normalization for reported paths and the filters that decide which files
//! are conversion candidates.

use std::path::Path;

/// Directory name whose subtrees are never visited
pub const EXCLUDED_DIR: &str = "node_modules";

/// File name suffixes selected for conversion
pub const CANDIDATE_SUFFIXES: [&str; 2] = [".tsx", ".ts"];

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Check if a directory path lies in an excluded subtree.
///
/// Substring match on the whole path, so the root itself counts too.
pub fn is_excluded_dir(path: &Path) -> bool {
    path.to_string_lossy().contains(EXCLUDED_DIR)
}

/// Check if a file name ends with one of the candidate suffixes
pub fn has_candidate_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| CANDIDATE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
        .unwrap_or(false)
}

/// Final path component for summaries, falling back to the full path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| normalize_path(path))
}
