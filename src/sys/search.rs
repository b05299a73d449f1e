//! Best-effort recursive file search.
//!
//! Used as a fallback when a file is missing from its expected location.
//! Any fault while walking (permission denied, vanished directory, broken
//! entry) is logged and treated as "not found below this point".

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// Default depth limit for [`find_file`].
pub const DEFAULT_MAX_DEPTH: usize = 12;

/// Search `root` breadth-first for a regular file named `file_name`.
///
/// Symlinked directories are not followed. Paths listed in `exclude` are
/// never returned (the expected location is usually excluded so that only
/// alternates are reported).
pub fn find_file(
    root: &Path,
    file_name: &str,
    max_depth: usize,
    exclude: &[PathBuf],
) -> Option<PathBuf> {
    if crate::sys::platform::is_elevated() {
        tracing::debug!("Searching {} for {}", root.display(), file_name);
    } else {
        tracing::debug!(
            "Searching {} for {} without elevated privileges; unreadable directories are skipped",
            root.display(),
            file_name
        );
    }

    let mut queue = VecDeque::from([(root.to_path_buf(), 0usize)]);

    while let Some((dir, depth)) = queue.pop_front() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", dir.display(), e);
                continue;
            }
        };

        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();

            if file_type.is_dir() {
                if depth < max_depth {
                    queue.push_back((path, depth + 1));
                }
            } else if file_type.is_file()
                && entry.file_name() == file_name
                && !exclude.contains(&path)
            {
                return Some(path);
            }
        }
    }

    None
}
