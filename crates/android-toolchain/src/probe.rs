//! Path Probe
//!
//! Finds a named file below a root directory. Likely subdirectories are
//! tried first; after that the whole tree is walked, later names first at
//! every level so that newer versioned directories win.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursion cap used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 12;

/// No prioritized subdirectories; go straight to the full scan
pub const NO_PRIORITY: &[&str] = &[];

/// Searches directory trees for executables and artifacts
#[derive(Debug, Clone, Copy)]
pub struct PathProbe {
    max_depth: usize,
}

impl Default for PathProbe {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PathProbe {
    /// Create a probe that descends at most `max_depth` levels below a root
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Find `file_name` under `root`, trying `prioritized` subdirectories first.
    ///
    /// Returns `None` when the file is nowhere under `root`. A miss in the
    /// prioritized subdirectories is logged and followed by a full scan.
    pub fn scan_for_path<S: AsRef<Path>>(
        &self,
        root: &Path,
        file_name: &str,
        prioritized: &[S],
    ) -> Option<PathBuf> {
        if !prioritized.is_empty() {
            for sub in prioritized {
                if let Some(found) = self.scan(&root.join(sub), file_name) {
                    return Some(found);
                }
            }

            warn!(
                "Did not find '{}' in any standard directory of '{}'. Scanning the whole tree instead",
                file_name,
                root.display()
            );
            debug!(" - Expected to find '{}' in any of:", file_name);
            for sub in prioritized {
                debug!(" - {}", root.join(sub).display());
            }
        }

        self.scan(root, file_name)
    }

    /// Depth-first walk: files before subdirectories, later names first.
    /// Directories more than `max_depth` levels below `dir` are not read.
    fn scan(&self, dir: &Path, file_name: &str) -> Option<PathBuf> {
        WalkDir::new(dir)
            .follow_links(true)
            .max_depth(self.max_depth + 1)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| b.file_name().cmp(a.file_name()))
            })
            .into_iter()
            .filter_map(Result::ok)
            .find(|entry| entry.depth() > 0 && !entry.file_type().is_dir() && entry.file_name() == file_name)
            .map(|entry| entry.into_path())
    }
}

/// Immediate children of `dir`, reverse-sorted by name. Unreadable directories are empty.
///
/// Used for the single-level version listings.
pub(crate) fn list_reverse_sorted(dir: &Path) -> Vec<(OsString, PathBuf)> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut children: Vec<(OsString, PathBuf)> = entries
        .flatten()
        .map(|entry| (entry.file_name(), entry.path()))
        .collect();
    children.sort_by(|a, b| b.0.cmp(&a.0));
    children
}
