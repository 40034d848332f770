//! Run configuration: where the project root is and which directories to scan.

use std::io;
use std::path::{Path, PathBuf};

use crate::consts::ROOT_ENV;

/// Resolves the project root.
///
/// Precedence: the explicit argument, then `$LUMEN_ROOT` (ignored when empty),
/// then the current working directory.
pub fn resolve_root(explicit: Option<PathBuf>) -> io::Result<PathBuf> {
  if let Some(root) = explicit {
    return Ok(root);
  }

  match std::env::var_os(ROOT_ENV) {
    Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
    _ => std::env::current_dir(),
  }
}

/// Directories to scan for build files. Relative entries are resolved against
/// `root`; no entries means the whole root.
pub fn source_roots(root: &Path, sources: &[PathBuf]) -> Vec<PathBuf> {
  if sources.is_empty() {
    return vec![root.to_path_buf()];
  }

  sources.iter().map(|source| root.join(source)).collect()
}
