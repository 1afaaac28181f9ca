//! Record document discovery

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Directories searched when none are configured.
pub const DEFAULT_SEARCH_DIRS: &[&str] = &["yaml_files", "yaml_files2"];

/// Extension of record documents.
pub const RECORD_EXTENSION: &str = "yaml";

/// Find every `*.yaml` file below the given directories, recursively.
///
/// Directories are visited in the order given and files are sorted by
/// name within each directory, so the result is stable across runs. A
/// missing directory contributes nothing. A file reachable from two
/// search directories is listed once.
pub fn discover_record_files<P: AsRef<Path>>(search_dirs: &[P]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for dir in search_dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            debug!("Search directory {} does not exist, skipping", dir.display());
            continue;
        }

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                    continue;
                }
            };

            let path = entry.path();
            let is_record = entry.file_type().is_file()
                && path.extension().is_some_and(|ext| ext == RECORD_EXTENSION);
            if !is_record {
                continue;
            }

            let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            if seen.insert(key) {
                files.push(path.to_path_buf());
            }
        }
    }

    debug!("Discovered {} record documents", files.len());
    files
}
