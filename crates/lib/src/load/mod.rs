//! Discovery and loading of `.build` files.
//!
//! [`find_build_files`] walks the source roots, [`load_all`] parses every file
//! on the tokio blocking pool and merges the descriptors into a
//! [`BuildGraph`](crate::module::BuildGraph). Per-file failures and duplicate
//! module names are recorded as diagnostics rather than aborting the load.

mod loader;
mod paths;
mod scan;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::diagnostics::{Diagnostic, Severity};
use crate::parse::{Located, ParseError};

pub use loader::{load_all, load_module};
pub use paths::{is_build_file, module_directory, module_name};
pub use scan::find_build_files;

#[derive(Debug, Error)]
pub enum LoadError {
  #[error("failed to read {}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("{}:{}", path.display(), source.location())]
  Parse {
    path: PathBuf,
    #[source]
    source: ParseError,
  },

  #[error("duplicate module '{name}' in {} (first defined in {})", path.display(), first.display())]
  DuplicateModule { name: String, path: PathBuf, first: PathBuf },
}

impl LoadError {
  /// The file the error belongs to.
  pub fn path(&self) -> &PathBuf {
    match self {
      LoadError::Read { path, .. } | LoadError::Parse { path, .. } | LoadError::DuplicateModule { path, .. } => path,
    }
  }

  /// Converts the error into a positioned diagnostic.
  pub fn to_diagnostic(&self) -> Diagnostic {
    let diagnostic = match self {
      LoadError::Read { source, .. } => Diagnostic::new(Severity::Error, format!("failed to read: {}", source)),
      LoadError::Parse { source, .. } => Diagnostic::new(Severity::Error, source.to_string()).at(source.location()),
      LoadError::DuplicateModule { name, first, .. } => Diagnostic::new(
        Severity::Error,
        format!("duplicate module '{}' (first defined in {})", name, first.display()),
      ),
    };
    diagnostic.in_file(self.path())
  }
}
