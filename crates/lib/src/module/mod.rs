//! Module descriptors and the aggregated build graph.

mod types;

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::graph::DependencyGraph;

pub use types::{ModuleDescriptor, ModuleType};

/// Every successfully loaded module, keyed by name.
///
/// Uses [`BTreeMap`] so iteration (and therefore graph construction and JSON
/// output) is ordered by module name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildGraph {
  modules: BTreeMap<String, ModuleDescriptor>,
}

/// A dependency naming a module that no descriptor defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndefinedDependency<'a> {
  pub module: &'a str,
  pub dependency: &'a str,
}

impl BuildGraph {
  /// Wraps an already deduplicated module map.
  pub fn new(modules: BTreeMap<String, ModuleDescriptor>) -> Self {
    Self { modules }
  }

  pub fn get(&self, name: &str) -> Option<&ModuleDescriptor> {
    self.modules.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.modules.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  pub fn modules(&self) -> &BTreeMap<String, ModuleDescriptor> {
    &self.modules
  }

  /// Descriptors in name order.
  pub fn iter(&self) -> impl Iterator<Item = &ModuleDescriptor> {
    self.modules.values()
  }

  /// Registers every module, in name order, into a fresh dependency graph.
  pub fn dependency_graph(&self) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for module in self.modules.values() {
      graph.add_module(module);
    }
    graph
  }

  /// Dependencies with no matching descriptor, in module name then
  /// declaration order. Repeated declarations are reported once.
  pub fn undefined_dependencies(&self) -> Vec<UndefinedDependency<'_>> {
    let mut undefined = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for module in self.modules.values() {
      for dependency in &module.dependencies {
        if self.modules.contains_key(dependency) || !seen.insert((module.name.as_str(), dependency.as_str())) {
          continue;
        }
        undefined.push(UndefinedDependency {
          module: &module.name,
          dependency,
        });
      }
    }

    undefined
  }
}
