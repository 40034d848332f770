//! Shared helpers for library integration tests.

use std::path::{Path, PathBuf};

use lumen_lib::consts::DEFAULT_LOAD_PARALLELISM;
use lumen_lib::diagnostics::Diagnostics;
use lumen_lib::load::{find_build_files, load_all};
use lumen_lib::module::{BuildGraph, ModuleDescriptor};
use tempfile::TempDir;

/// A throwaway project tree.
pub struct Project {
  pub temp: TempDir,
}

impl Project {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  pub fn root(&self) -> PathBuf {
    dunce::canonicalize(self.temp.path()).unwrap()
  }

  /// Write a file relative to the project root.
  pub fn write(&self, relative: &str, content: &str) -> PathBuf {
    let path = self.root().join(relative);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
  }

  /// Scan the whole root and load everything found.
  pub async fn load(&self) -> (BuildGraph, Diagnostics) {
    let diagnostics = Diagnostics::new();
    let files = find_build_files(&[self.root()], &diagnostics);
    let build = load_all(&files, DEFAULT_LOAD_PARALLELISM, &diagnostics).await;
    (build, diagnostics)
  }

  /// The engine sample: Core <- Math <- Renderer <- Game, plus Audio.
  pub fn engine() -> Self {
    let project = Self::new();
    project.write("Engine/Core/Core.build", CORE);
    project.write("Engine/Math/Math.build", "module Math { deps = [Core] }");
    project.write(
      "Engine/Renderer/Renderer.build",
      r#"module Renderer {
  type = shared_library
  sources = ["Source/Renderer.cpp"]
  public_includes = ["Include"]
  deps = [Core, Math]
}"#,
    );
    project.write("Engine/Audio/Audio.build", "module Audio { deps = [\"Core\"] }");
    project.write("Game/Game.build", GAME);
    project
  }
}

pub const CORE: &str = r#"// Foundation library
module Core {
  type = static_library
  sources = ["Source/Core.cpp", "Source/Memory.cpp"]
  public_includes = ["Include"]
  private_includes = ["Private"]
  defines = ["CORE_EXPORTS=1"]
}
"#;

pub const GAME: &str = r#"/* Entry point */
module Game {
  type = executable
  sources = ["Source/Main.cpp"]
  deps = [Renderer, Audio]
}
"#;

/// Build a descriptor map directly, without going through files.
pub fn build_graph(modules: &[(&str, &[&str])]) -> BuildGraph {
  BuildGraph::new(
    modules
      .iter()
      .map(|(name, deps)| {
        (
          name.to_string(),
          ModuleDescriptor::new(*name, ".").with_dependencies(deps.iter().copied()),
        )
      })
      .collect(),
  )
}

pub fn index_of(order: &[String], name: &str) -> usize {
  order
    .iter()
    .position(|n| n == name)
    .unwrap_or_else(|| panic!("{} missing from {:?}", name, order))
}

pub fn relative(root: &Path, path: &Path) -> String {
  path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
}
