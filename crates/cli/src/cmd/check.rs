//! Implementation of the `lumen check` command.

use anyhow::{Context, Result};

use lumen_lib::graph::resolve_build_order;

use super::{DiscoveryArgs, Workspace};
use crate::output::{print_stat, print_success};

/// Loads every build file and validates the dependency graph without printing
/// the order.
pub fn cmd_check(discovery: &DiscoveryArgs) -> Result<()> {
  let workspace = Workspace::load(discovery)?;
  workspace.report()?;

  let order = resolve_build_order(&workspace.build).context("Cannot compute build order")?;
  let undefined = order.len().saturating_sub(workspace.build.len());

  print_success("Build files are valid");
  print_stat("Root", &workspace.root.display().to_string());
  print_stat("Build files", &workspace.files.to_string());
  print_stat("Modules", &workspace.build.len().to_string());
  if undefined > 0 {
    print_stat("Undefined dependencies", &undefined.to_string());
  }

  Ok(())
}
