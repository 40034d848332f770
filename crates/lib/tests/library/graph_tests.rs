//! Graph construction, cycle detection and ordering.

use lumen_lib::graph::{CycleDetector, GraphError, TopologicalSorter, resolve_build_order};

use super::common::{build_graph, index_of};

mod acyclic {
  use super::*;

  #[test]
  fn chain_orders_dependencies_first() {
    let build = build_graph(&[("A", &[]), ("B", &["A"]), ("C", &["B"])]);
    let graph = build.dependency_graph();

    assert!(!CycleDetector::new(&graph).has_cycle());
    assert_eq!(TopologicalSorter::new(&graph).sort(), vec!["A", "B", "C"]);
  }

  #[test]
  fn order_is_stable_across_runs() {
    let modules: &[(&str, &[&str])] = &[
      ("Game", &["Renderer", "Audio"]),
      ("Renderer", &["Core", "Math"]),
      ("Audio", &["Core"]),
      ("Math", &["Core"]),
      ("Core", &[]),
      ("Tools", &[]),
    ];

    let first = resolve_build_order(&build_graph(modules)).unwrap();
    for _ in 0..20 {
      assert_eq!(resolve_build_order(&build_graph(modules)).unwrap(), first);
    }
    assert_eq!(first, vec!["Core", "Tools", "Audio", "Math", "Renderer", "Game"]);
  }

  #[test]
  fn forward_dependency_is_a_source_node() {
    let build = build_graph(&[("Game", &["Engine"]), ("Tool", &[])]);
    let graph = build.dependency_graph();

    assert!(graph.contains("Engine"));
    assert!(graph.dependencies_of("Engine").is_empty());

    let order = resolve_build_order(&build).unwrap();
    assert_eq!(order.len(), 3);
    assert!(index_of(&order, "Engine") < index_of(&order, "Game"));
  }
}

mod cyclic {
  use super::*;

  #[test]
  fn three_module_cycle() {
    let build = build_graph(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])]);
    let graph = build.dependency_graph();
    let cycle = CycleDetector::new(&graph).find_cycle().unwrap();

    let path = cycle.path();
    assert_eq!(path.first(), path.last());
    let mut members = cycle.members().to_vec();
    members.sort();
    assert_eq!(members, vec!["A", "B", "C"]);
  }

  #[test]
  fn gate_refuses_to_order() {
    let build = build_graph(&[("Core", &[]), ("A", &["B", "Core"]), ("B", &["A"])]);

    match resolve_build_order(&build) {
      Err(GraphError::CycleDetected { cycle }) => {
        assert_eq!(cycle.to_string(), "A → B → A");
      }
      Ok(order) => panic!("cyclic graph was ordered: {:?}", order),
    }
  }

  #[test]
  fn sorter_alone_returns_partial_order() {
    let build = build_graph(&[("Core", &[]), ("A", &["B", "Core"]), ("B", &["A"])]);
    let order = TopologicalSorter::new(&build.dependency_graph()).sort();
    assert_eq!(order, vec!["Core"]);
  }
}

mod dot {
  use super::*;

  #[test]
  fn exports_every_edge() {
    let build = build_graph(&[("Game", &["Engine", "Audio"]), ("Engine", &["Core"]), ("Core", &[])]);
    let dot = build.dependency_graph().to_dot();

    assert_eq!(dot.matches("->").count(), 3);
    for name in ["Game", "Engine", "Audio", "Core"] {
      assert!(dot.contains(&format!("\"{}\"", name)), "{} missing from:\n{}", name, dot);
    }
  }
}
