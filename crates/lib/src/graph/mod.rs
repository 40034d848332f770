//! Dependency graph over module names.
//!
//! This module handles:
//! - Building a graph of forward (module → dependency) and reverse edges
//! - Finding a dependency cycle ([`CycleDetector`])
//! - Computing a dependency-first build order ([`TopologicalSorter`])
//!
//! Nodes are plain names. A dependency that no descriptor defines still becomes
//! a node; deciding whether that is acceptable is left to the caller (see
//! [`BuildGraph::undefined_dependencies`]).

mod cycle;
mod topo;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;
use tracing::debug;

use crate::module::{BuildGraph, ModuleDescriptor};

pub use cycle::{Cycle, CycleDetector};
pub use topo::TopologicalSorter;

/// Errors raised while validating the dependency graph.
#[derive(Debug, Error)]
pub enum GraphError {
  /// The graph contains a dependency cycle; no build order exists.
  #[error("dependency cycle detected: {cycle}")]
  CycleDetected { cycle: Cycle },
}

/// Adjacency structure over module names.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
  /// Every module and every referenced dependency.
  nodes: BTreeSet<String>,

  /// Edges: module -> declared dependencies, in declaration order.
  edges: BTreeMap<String, Vec<String>>,

  /// Reverse edges: dependency -> modules that declared it.
  reverse_edges: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a module and its dependencies.
  ///
  /// Calling this twice for the same name accumulates edges; duplicate module
  /// names are rejected earlier, when descriptors are merged.
  pub fn add_module(&mut self, module: &ModuleDescriptor) {
    self.nodes.insert(module.name.clone());

    for dependency in &module.dependencies {
      self.nodes.insert(dependency.clone());

      self
        .edges
        .entry(module.name.clone())
        .or_default()
        .push(dependency.clone());

      self
        .reverse_edges
        .entry(dependency.clone())
        .or_default()
        .push(module.name.clone());
    }
  }

  /// Declared dependencies of `name`, or an empty slice.
  pub fn dependencies_of(&self, name: &str) -> &[String] {
    self.edges.get(name).map(Vec::as_slice).unwrap_or_default()
  }

  /// Modules that declared `name` as a dependency, or an empty slice.
  pub fn dependents_of(&self, name: &str) -> &[String] {
    self.reverse_edges.get(name).map(Vec::as_slice).unwrap_or_default()
  }

  /// All node names, in lexicographic order.
  pub fn all_nodes(&self) -> impl Iterator<Item = &String> {
    self.nodes.iter()
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.nodes.contains(name)
  }

  /// Renders the graph in Graphviz DOT format, one edge per declared
  /// dependency pointing from the module to the dependency.
  pub fn to_dot(&self) -> String {
    let mut graph: DiGraph<&str, usize> = DiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    for name in &self.nodes {
      indices.insert(name, graph.add_node(name));
    }

    for (module, dependencies) in &self.edges {
      for (position, dependency) in dependencies.iter().enumerate() {
        if let (Some(&from), Some(&to)) = (indices.get(module.as_str()), indices.get(dependency.as_str())) {
          graph.add_edge(from, to, position);
        }
      }
    }

    format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
  }
}

/// Validates the modules and computes their build order.
///
/// Builds the dependency graph, rejects it if it contains a cycle, and
/// otherwise returns every node (modules and undefined dependencies alike) in
/// dependency-first order.
pub fn resolve_build_order(build: &BuildGraph) -> Result<Vec<String>, GraphError> {
  let graph = build.dependency_graph();

  for undefined in build.undefined_dependencies() {
    debug!(
      module = undefined.module,
      dependency = undefined.dependency,
      "dependency is not defined by any module"
    );
  }

  if let Some(cycle) = CycleDetector::new(&graph).find_cycle() {
    debug!(%cycle, "dependency cycle detected");
    return Err(GraphError::CycleDetected { cycle });
  }

  let order = TopologicalSorter::new(&graph).sort();
  debug!(modules = build.len(), nodes = graph.node_count(), "resolved build order");
  Ok(order)
}
