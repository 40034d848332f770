//! Dependency-first ordering (Kahn's algorithm).

use std::collections::{HashMap, VecDeque};

use tracing::debug;

use super::DependencyGraph;

/// Orders a [`DependencyGraph`] so every module comes after all of its
/// dependencies.
///
/// A node's in-degree is the number of dependencies it declares. Nodes with
/// none are queued first, in lexicographic order; a dependent joins the back
/// of the queue once its last dependency has been emitted. Dependents of the
/// same node are considered in the order they were added to the graph.
///
/// On a cyclic graph the nodes on (or behind) a cycle never reach zero and are
/// left out of the result. Check with [`CycleDetector`](super::CycleDetector)
/// first.
pub struct TopologicalSorter<'g> {
  graph: &'g DependencyGraph,
}

impl<'g> TopologicalSorter<'g> {
  pub fn new(graph: &'g DependencyGraph) -> Self {
    Self { graph }
  }

  pub fn sort(&self) -> Vec<String> {
    let mut in_degree: HashMap<&'g str, usize> = self
      .graph
      .all_nodes()
      .map(|node| (node.as_str(), self.graph.dependencies_of(node).len()))
      .collect();

    let mut queue: VecDeque<&'g str> = self
      .graph
      .all_nodes()
      .map(String::as_str)
      .filter(|node| in_degree.get(node).copied() == Some(0))
      .collect();

    let mut order = Vec::with_capacity(in_degree.len());

    while let Some(node) = queue.pop_front() {
      order.push(node.to_string());

      for dependent in self.graph.dependents_of(node) {
        let Some(remaining) = in_degree.get_mut(dependent.as_str()) else {
          continue;
        };

        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
          queue.push_back(dependent);
        }
      }
    }

    if order.len() < in_degree.len() {
      debug!(
        sorted = order.len(),
        nodes = in_degree.len(),
        "nodes left unsorted by a cycle"
      );
    }

    order
  }
}
