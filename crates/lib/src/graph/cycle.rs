//! Depth-first cycle detection.

use std::collections::HashSet;
use std::fmt;

use tracing::trace;

use super::DependencyGraph;

/// A closed dependency path: the first and last entries are the same module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
  path: Vec<String>,
}

impl Cycle {
  pub fn path(&self) -> &[String] {
    &self.path
  }

  /// The distinct modules on the cycle, in path order.
  pub fn members(&self) -> &[String] {
    &self.path[..self.path.len().saturating_sub(1)]
  }
}

impl fmt::Display for Cycle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.path.join(" → "))
  }
}

/// Searches a [`DependencyGraph`] for a cycle.
///
/// Nodes are explored in the graph's (sorted) node order and edges in
/// declaration order, so the reported cycle is the same on every run. The
/// search keeps its own stack, so deep dependency chains do not grow the call
/// stack.
pub struct CycleDetector<'g> {
  graph: &'g DependencyGraph,
}

impl<'g> CycleDetector<'g> {
  pub fn new(graph: &'g DependencyGraph) -> Self {
    Self { graph }
  }

  pub fn has_cycle(&self) -> bool {
    self.find_cycle().is_some()
  }

  /// Returns the first cycle found, or `None` when the graph is acyclic.
  pub fn find_cycle(&self) -> Option<Cycle> {
    let mut visited: HashSet<&'g str> = HashSet::new();

    for start in self.graph.all_nodes() {
      if visited.contains(start.as_str()) {
        continue;
      }

      if let Some(cycle) = self.search_from(start, &mut visited) {
        trace!(%cycle, "found cycle");
        return Some(cycle);
      }
    }

    None
  }

  /// Walks everything reachable from `start`. Each frame is a node on the
  /// current path plus the index of the next dependency edge to follow.
  fn search_from(&self, start: &'g str, visited: &mut HashSet<&'g str>) -> Option<Cycle> {
    let mut frames: Vec<(&'g str, usize)> = vec![(start, 0)];
    let mut on_path: HashSet<&'g str> = HashSet::from([start]);

    while let Some(&(node, next)) = frames.last() {
      let Some(dependency) = self.graph.dependencies_of(node).get(next) else {
        // Every edge explored: backtrack.
        frames.pop();
        on_path.remove(node);
        visited.insert(node);
        continue;
      };

      if let Some(frame) = frames.last_mut() {
        frame.1 += 1;
      }

      let dependency = dependency.as_str();

      if on_path.contains(dependency) {
        let first = frames.iter().position(|&(name, _)| name == dependency).unwrap_or(0);
        let mut path: Vec<String> = frames[first..].iter().map(|&(name, _)| name.to_string()).collect();
        path.push(dependency.to_string());
        return Some(Cycle { path });
      }

      if !visited.contains(dependency) {
        frames.push((dependency, 0));
        on_path.insert(dependency);
      }
    }

    None
  }
}
