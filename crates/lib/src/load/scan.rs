//! Build file discovery.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, trace};
use walkdir::WalkDir;

use super::paths::is_build_file;
use crate::diagnostics::Diagnostics;

/// Recursively finds build files under each root.
///
/// Files are returned root by root, sorted by path within each root, and each
/// file at most once. A missing root or an unreadable directory is reported as
/// a warning and skipped.
pub fn find_build_files(roots: &[PathBuf], diagnostics: &Diagnostics) -> Vec<PathBuf> {
  let mut files = Vec::new();
  let mut seen = HashSet::new();

  for root in roots {
    if !root.is_dir() {
      diagnostics.warning(format!("directory not found: {}", root.display()));
      continue;
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
      let entry = match entry {
        Ok(entry) => entry,
        Err(err) => {
          let location = err
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| root.display().to_string());
          diagnostics.warning(format!("cannot scan {}: {}", location, err));
          continue;
        }
      };

      if !entry.file_type().is_file() || !is_build_file(entry.path()) {
        continue;
      }

      let path = entry.into_path();
      if seen.insert(path.clone()) {
        trace!(path = %path.display(), "found build file");
        files.push(path);
      }
    }
  }

  debug!(roots = roots.len(), files = files.len(), "scanned for build files");
  files
}
