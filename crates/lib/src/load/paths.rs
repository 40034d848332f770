//! Deriving module identity from build file paths. No I/O.

use std::path::{Path, PathBuf};

use crate::consts::BUILD_FILE_EXTENSION;

/// Whether `path` names a build file (extension compared case-insensitively).
pub fn is_build_file(path: &Path) -> bool {
  let extension = BUILD_FILE_EXTENSION.trim_start_matches('.');
  path
    .extension()
    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
}

/// The module name for a build file: its file name without the extension.
///
/// `Engine/Core.build` → `Core`. A name without the extension is returned
/// unchanged.
pub fn module_name(path: &Path) -> String {
  let file_name = path
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default();

  let split = file_name.len().saturating_sub(BUILD_FILE_EXTENSION.len());
  match file_name.get(split..) {
    Some(suffix) if suffix.eq_ignore_ascii_case(BUILD_FILE_EXTENSION) => file_name[..split].to_string(),
    _ => file_name,
  }
}

/// The directory holding a build file, or `.` for a bare file name.
pub fn module_directory(path: &Path) -> PathBuf {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
    _ => PathBuf::from("."),
  }
}
