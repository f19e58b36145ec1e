//! Manifest discovery
//!
//! Walks the directory tree below a root looking for files named exactly
//! `Cargo.toml` and applies the optional filter pattern. Paths are reported
//! relative to the root, in traversal order; callers must not depend on the
//! ordering.

use regex::Regex;
use std::path::Path;

use crate::error::{LinkerError, Result};

pub const MANIFEST_NAME: &str = "Cargo.toml";

/// Compile the optional filter pattern.
///
/// An absent or empty pattern matches everything. A literal substring is a
/// valid regex that matches by inclusion, so plain-text filters work without
/// any special casing. A malformed regex is rejected up front rather than
/// silently matching nothing.
pub fn compile_filter(pattern: Option<&str>) -> Result<Option<Regex>> {
    match pattern {
        None => Ok(None),
        Some("") => Ok(None),
        Some(p) => Regex::new(p)
            .map(Some)
            .map_err(|e| LinkerError::Scan(format!("invalid filter pattern '{}': {}", p, e))),
    }
}

/// Find all Cargo manifests under `root`, filtered by `filter` if present.
///
/// Returns root-relative paths as strings. Any traversal error (for example
/// a subdirectory the process cannot read) aborts the scan.
pub fn find_manifests(root: &Path, filter: Option<&Regex>) -> Result<Vec<String>> {
    let mut manifests = Vec::new();

    for entry in walkdir::WalkDir::new(root) {
        let entry = entry.map_err(|e| LinkerError::Scan(e.to_string()))?;

        if !entry.file_type().is_file() || entry.file_name() != MANIFEST_NAME {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path());
        let path = relative.to_string_lossy().into_owned();

        if filter.map_or(true, |re| re.is_match(&path)) {
            manifests.push(path);
        }
    }

    Ok(manifests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch_manifest(root: &Path, dir: &str) {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_NAME), "[package]\n").unwrap();
    }

    #[test]
    fn test_finds_nested_manifests() {
        let tmp = tempfile::tempdir().unwrap();
        touch_manifest(tmp.path(), "a");
        touch_manifest(tmp.path(), "b/c");

        let mut found = find_manifests(tmp.path(), None).unwrap();
        found.sort();
        assert_eq!(found, vec!["a/Cargo.toml", "b/c/Cargo.toml"]);
    }

    #[test]
    fn test_ignores_other_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Cargo.lock"), "").unwrap();
        fs::write(tmp.path().join("cargo.toml"), "").unwrap();

        let found = find_manifests(tmp.path(), None).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_filter_keeps_matching_paths() {
        let tmp = tempfile::tempdir().unwrap();
        touch_manifest(tmp.path(), "a");
        touch_manifest(tmp.path(), "b/c");

        let filter = compile_filter(Some("b/")).unwrap();
        let found = find_manifests(tmp.path(), filter.as_ref()).unwrap();
        assert_eq!(found, vec!["b/c/Cargo.toml"]);
    }

    #[test]
    fn test_filter_matching_nothing_is_empty_not_error() {
        let tmp = tempfile::tempdir().unwrap();
        touch_manifest(tmp.path(), "a");

        let filter = compile_filter(Some("zzz")).unwrap();
        let found = find_manifests(tmp.path(), filter.as_ref()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        assert!(compile_filter(Some("")).unwrap().is_none());
        assert!(compile_filter(None).unwrap().is_none());
    }

    #[test]
    fn test_malformed_pattern_is_scan_error() {
        let err = compile_filter(Some("[unclosed")).unwrap_err();
        assert!(matches!(err, LinkerError::Scan(_)));
    }

    #[test]
    fn test_no_manifests_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let found = find_manifests(tmp.path(), None).unwrap();
        assert!(found.is_empty());
    }
}
