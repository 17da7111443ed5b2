//! Directory tree walker.
//!
//! Walks a project tree top-down, pruning ignored directories before
//! descending into them, and collects the surviving files into a
//! [`FileSet`]. Unreadable files are logged and skipped; they never abort
//! the scan.

use std::path::Path;

use walkdir::WalkDir;

use crate::filter::PathFilter;
use crate::models::FileSet;
use crate::progress::{ScanEvent, ScanProgressReporter};

/// Walk `root` and collect readable, non-ignored files.
///
/// Returns an empty [`FileSet`] (with a stderr diagnostic) when `root` is
/// not an existing directory; callers treat that as "nothing to do".
///
/// Entries are visited in file-name order within each directory, so the
/// resulting set is deterministic for a given tree. File content is decoded
/// leniently: invalid UTF-8 sequences are replaced, never fatal.
pub fn scan_directory(
    root: &Path,
    filter: &PathFilter,
    progress: &dyn ScanProgressReporter,
) -> FileSet {
    let mut files = FileSet::new();

    if !root.is_dir() {
        eprintln!("Error: Directory not found: {}", root.display());
        return files;
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        // Prune ignored directories before descending. Depth 0 is the root
        // itself, which is never filtered by name.
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !filter.is_dir_ignored(&name)
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                // An unreadable subtree yields less content, not a failure.
                eprintln!("Error reading {}: {}", display_walk_path(&err), err);
                continue;
            }
        };

        let relative = relative_key(entry.path(), root);

        if entry.file_type().is_dir() {
            progress.report(ScanEvent::Directory { path: relative });
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if filter.is_file_ignored(&name) {
            continue;
        }

        match std::fs::read(entry.path()) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes).into_owned();
                files.push(relative, content);
            }
            Err(err) => {
                eprintln!("Error reading {}: {}", relative, err);
            }
        }
    }

    progress.report(ScanEvent::Finished {
        files: files.len() as u64,
    });

    files
}

/// Root-relative key for a scanned path: POSIX separators, no `./` prefix.
fn relative_key(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

fn display_walk_path(err: &walkdir::Error) -> String {
    err.path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<unknown>".to_string())
}
