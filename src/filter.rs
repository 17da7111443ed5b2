//! Path filtering for the directory scan.
//!
//! Decides which directories are descended into and which files are read.
//! Directory checks run before recursion, so an ignored subtree costs no
//! I/O beyond its parent's listing.

use std::collections::HashSet;

use crate::config::FilterConfig;

/// Membership tests over the configured ignore sets.
///
/// A directory is ignored when its bare name is in the ignored-directory
/// set or starts with a dot. A file is ignored when its bare name is in
/// the ignored-file set, starts with a dot, or its extension (from the
/// last `.` to the end, dot included) is in the ignored-extension set.
/// The sets are checked independently; matching any one excludes the path.
pub struct PathFilter {
    dirs: HashSet<String>,
    extensions: HashSet<String>,
    files: HashSet<String>,
}

impl PathFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            dirs: config.ignore_dirs.iter().cloned().collect(),
            extensions: config.ignore_extensions.iter().cloned().collect(),
            files: config.ignore_files.iter().cloned().collect(),
        }
    }

    pub fn is_dir_ignored(&self, name: &str) -> bool {
        name.starts_with('.') || self.dirs.contains(name)
    }

    pub fn is_file_ignored(&self, name: &str) -> bool {
        if name.starts_with('.') || self.files.contains(name) {
            return true;
        }
        match file_extension(name) {
            Some(ext) => self.extensions.contains(ext),
            None => false,
        }
    }
}

/// Extension of a bare file name: the substring from the last `.` to the
/// end, dot included. `None` when the name contains no dot.
fn file_extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}
