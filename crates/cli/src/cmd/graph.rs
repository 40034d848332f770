//! Implementation of the `lumen graph` command.

use anyhow::Result;

use super::{DiscoveryArgs, Workspace};

/// Prints the dependency graph in Graphviz DOT format.
///
/// Cycles are not an error here, so the graph can be used to find them.
pub fn cmd_graph(discovery: &DiscoveryArgs) -> Result<()> {
  let workspace = Workspace::load(discovery)?;
  workspace.report()?;

  print!("{}", workspace.build.dependency_graph().to_dot());
  Ok(())
}
