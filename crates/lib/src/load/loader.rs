//! Reading and parsing build files, one task per file.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use super::LoadError;
use super::paths::{module_directory, module_name};
use crate::diagnostics::Diagnostics;
use crate::module::{BuildGraph, ModuleDescriptor};
use crate::parse::parse_module;

/// Reads and parses a single build file.
///
/// The module name and directory come from the path, not from the file.
pub fn load_module(path: &Path) -> Result<ModuleDescriptor, LoadError> {
  let name = module_name(path);

  let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let module = parse_module(&name, module_directory(path), &source).map_err(|source| LoadError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  debug!(module = %module.name, path = %path.display(), "loaded build file");
  Ok(module)
}

/// Loads every file concurrently and merges the results.
///
/// At most `parallelism` files are read and parsed at a time. A file that
/// fails is reported to `diagnostics` and left out; the other files are still
/// loaded. Results are merged in the order of `files`, so when two files
/// produce the same module name the first one is kept and the second is
/// reported as a duplicate.
pub async fn load_all(files: &[PathBuf], parallelism: usize, diagnostics: &Diagnostics) -> BuildGraph {
  let semaphore = Arc::new(Semaphore::new(parallelism.max(1)));
  let mut join_set = JoinSet::new();

  for (index, path) in files.iter().enumerate() {
    let permit = semaphore.clone().acquire_owned().await.ok();
    let path = path.clone();

    join_set.spawn_blocking(move || {
      let _permit = permit;
      (index, load_module(&path))
    });
  }

  let mut results = Vec::with_capacity(files.len());
  while let Some(joined) = join_set.join_next().await {
    match joined {
      Ok(result) => results.push(result),
      Err(err) => {
        error!(error = %err, "load task panicked");
        diagnostics.error(format!("load task failed: {}", err));
      }
    }
  }

  results.sort_by_key(|(index, _)| *index);
  merge(files, results, diagnostics)
}

/// Single-writer reduction of per-file results into one graph.
fn merge(
  files: &[PathBuf],
  results: Vec<(usize, Result<ModuleDescriptor, LoadError>)>,
  diagnostics: &Diagnostics,
) -> BuildGraph {
  let mut modules: BTreeMap<String, ModuleDescriptor> = BTreeMap::new();
  let mut origins: BTreeMap<String, usize> = BTreeMap::new();

  for (index, result) in results {
    let module = match result {
      Ok(module) => module,
      Err(err) => {
        diagnostics.push(err.to_diagnostic());
        continue;
      }
    };

    match modules.entry(module.name.clone()) {
      Entry::Vacant(slot) => {
        origins.insert(module.name.clone(), index);
        slot.insert(module);
      }
      Entry::Occupied(_) => {
        let first = origins.get(&module.name).and_then(|&i| files.get(i)).cloned().unwrap_or_default();
        let err = LoadError::DuplicateModule {
          name: module.name,
          first,
          path: files.get(index).cloned().unwrap_or_default(),
        };
        diagnostics.push(err.to_diagnostic());
      }
    }
  }

  info!(files = files.len(), modules = modules.len(), "loaded modules");
  BuildGraph::new(modules)
}
