mod check;
mod clean;
mod graph;
mod order;
mod parse;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::debug;

use lumen_lib::config::{resolve_root, source_roots};
use lumen_lib::consts::{BUILD_FILE_EXTENSION, DEFAULT_LOAD_PARALLELISM};
use lumen_lib::diagnostics::Diagnostics;
use lumen_lib::load::{find_build_files, load_all};
use lumen_lib::module::BuildGraph;

use crate::output::print_diagnostic;

pub use check::cmd_check;
pub use clean::cmd_clean;
pub use graph::cmd_graph;
pub use order::cmd_order;
pub use parse::cmd_parse;

/// Where to look for build files.
#[derive(Debug, Clone, Default, Args)]
pub struct DiscoveryArgs {
  /// Project root (defaults to $LUMEN_ROOT, then the current directory)
  #[arg(long, value_name = "DIR")]
  pub root: Option<PathBuf>,

  /// Directory to scan, relative to the root; repeatable (defaults to the root)
  #[arg(long = "source", value_name = "DIR")]
  pub sources: Vec<PathBuf>,
}

/// Every module found under the discovery roots.
pub struct Workspace {
  pub root: PathBuf,
  pub files: usize,
  pub build: BuildGraph,
  pub diagnostics: Diagnostics,
}

impl Workspace {
  /// Scans and loads the project described by `args`.
  ///
  /// Fails only when nothing can be loaded at all; per-file problems are left
  /// in `diagnostics`.
  pub fn load(args: &DiscoveryArgs) -> Result<Self> {
    let root = resolve_root(args.root.clone()).context("Failed to determine project root")?;
    let root = dunce::canonicalize(&root).unwrap_or(root);
    let diagnostics = Diagnostics::new();

    let files = find_build_files(&source_roots(&root, &args.sources), &diagnostics);
    if files.is_empty() {
      print_diagnostics(&diagnostics, &root);
      bail!("No {} files found under {}", BUILD_FILE_EXTENSION, root.display());
    }

    let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
    let build = rt.block_on(load_all(&files, DEFAULT_LOAD_PARALLELISM, &diagnostics));
    diagnostics.info(format!(
      "Loaded {} module(s) from {} build file(s)",
      build.len(),
      files.len()
    ));

    for undefined in build.undefined_dependencies() {
      diagnostics.warning(format!(
        "module '{}' depends on '{}', which no build file defines",
        undefined.module, undefined.dependency
      ));
    }

    debug!(root = %root.display(), files = files.len(), modules = build.len(), "workspace loaded");

    Ok(Self {
      root,
      files: files.len(),
      build,
      diagnostics,
    })
  }

  /// Prints every diagnostic and fails if any of them is an error.
  pub fn report(&self) -> Result<()> {
    print_diagnostics(&self.diagnostics, &self.root);

    let errors = self.diagnostics.error_count();
    if errors > 0 {
      bail!("{} error(s) while loading build files", errors);
    }
    Ok(())
  }
}

pub fn print_diagnostics(diagnostics: &Diagnostics, root: &Path) {
  for diagnostic in diagnostics.all() {
    print_diagnostic(&diagnostic, root);
  }
}
