//! Implementation of the `lumen order` command.

use anyhow::{Context, Result};
use serde::Serialize;

use lumen_lib::graph::resolve_build_order;
use lumen_lib::module::ModuleDescriptor;

use super::{DiscoveryArgs, Workspace};
use crate::output::{OutputFormat, print_json};

#[derive(Serialize)]
struct OrderReport<'a> {
  order: &'a [String],
  modules: Vec<&'a ModuleDescriptor>,
}

/// Prints the dependency-first build order.
///
/// Text output is one module name per line. Names of undefined dependencies
/// appear in the order too, but have no entry under `modules` in JSON output.
/// Nothing is printed to stdout when loading fails or the graph has a cycle.
pub fn cmd_order(discovery: &DiscoveryArgs, output: OutputFormat) -> Result<()> {
  let workspace = Workspace::load(discovery)?;
  workspace.report()?;

  let order = resolve_build_order(&workspace.build).context("Cannot compute build order")?;

  if output.is_json() {
    let modules = order.iter().filter_map(|name| workspace.build.get(name)).collect();
    print_json(&OrderReport { order: &order, modules })?;
  } else {
    for name in &order {
      println!("{}", name);
    }
  }

  Ok(())
}
