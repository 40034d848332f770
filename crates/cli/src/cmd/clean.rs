//! Implementation of the `lumen clean` command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use lumen_lib::config::resolve_root;
use lumen_lib::consts::{BINARIES_DIR, INTERMEDIATE_DIR};
use lumen_lib::diagnostics::{Diagnostic, Diagnostics, Severity};

use super::print_diagnostics;

/// Deletes the intermediate and binary output directories under the root.
///
/// Every directory is attempted even if an earlier one could not be removed;
/// the command fails afterwards if any deletion did.
pub fn cmd_clean(root: Option<PathBuf>) -> Result<()> {
  let root = resolve_root(root).context("Failed to determine project root")?;
  let diagnostics = Diagnostics::new();

  let deleted = clean_outputs(&root, &diagnostics);
  debug!(root = %root.display(), deleted, "clean finished");
  print_diagnostics(&diagnostics, &root);

  let errors = diagnostics.error_count();
  if errors > 0 {
    bail!("{} output director{} could not be deleted", errors, if errors == 1 { "y" } else { "ies" });
  }
  Ok(())
}

/// Removes each output directory that exists, recording one diagnostic per
/// directory touched. Returns how many were deleted.
fn clean_outputs(root: &Path, diagnostics: &Diagnostics) -> usize {
  let mut deleted = 0;
  let mut failed = false;

  for name in [INTERMEDIATE_DIR, BINARIES_DIR] {
    let dir = root.join(name);
    if !dir.is_dir() {
      continue;
    }

    match fs::remove_dir_all(&dir) {
      Ok(()) => {
        info!(path = %dir.display(), "deleted output directory");
        diagnostics.info(format!("Deleted {}", name));
        deleted += 1;
      }
      Err(err) => {
        diagnostics.push(Diagnostic::new(Severity::Error, format!("failed to delete: {}", err)).in_file(&dir));
        failed = true;
      }
    }
  }

  if deleted == 0 && !failed {
    diagnostics.info("Nothing to clean");
  }

  deleted
}
