//! Minimal glob-style matching for file names.
//!
//! Patterns support `*` (any run of characters) and `?` (any single
//! character). Matching is against a single file name, never a path.

use std::fs;
use std::path::{Path, PathBuf};

/// Check whether `name` matches the glob `pattern`.
pub fn matches(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();
    match_from(&pattern, &name)
}

fn match_from(pattern: &[char], name: &[char]) -> bool {
    match pattern.split_first() {
        None => name.is_empty(),
        Some(('*', rest)) => (0..=name.len()).any(|skip| match_from(rest, &name[skip..])),
        Some(('?', rest)) => !name.is_empty() && match_from(rest, &name[1..]),
        Some((c, rest)) => name.first() == Some(c) && match_from(rest, &name[1..]),
    }
}

/// The literal part of a pattern before its first wildcard.
pub fn literal_prefix(pattern: &str) -> &str {
    let end = pattern.find(['*', '?']).unwrap_or(pattern.len());
    &pattern[..end]
}

/// The part of `name` that follows the pattern's literal prefix.
///
/// For `libcudart.so.*` and `libcudart.so.12.2.140` this yields `12.2.140`.
/// Returns `None` when the name does not match the pattern or the suffix is
/// empty.
pub fn wildcard_suffix<'a>(pattern: &str, name: &'a str) -> Option<&'a str> {
    if !matches(pattern, name) {
        return None;
    }
    name.strip_prefix(literal_prefix(pattern))
        .filter(|suffix| !suffix.is_empty())
}

/// List entries of `dir` whose file names match `pattern`, sorted by name.
///
/// Unreadable directories and entries yield an empty or partial result.
pub fn glob_dir(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::debug!("Cannot read {}", dir.display());
        return Vec::new();
    };

    let mut found: Vec<PathBuf> = entries
        .map_while(std::result::Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| matches(pattern, name))
        })
        .map(|entry| entry.path())
        .collect();
    found.sort();
    found
}
