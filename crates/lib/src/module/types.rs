//! Module descriptor types.
//!
//! A [`ModuleDescriptor`] is the normalized result of parsing one `.build`
//! file. Its `name` and `directory` come from the file's path; everything else
//! comes from the DSL.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The kind of artifact a module produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
  Executable,
  #[default]
  StaticLibrary,
  SharedLibrary,
}

impl ModuleType {
  /// Resolves a `type = ...` value. Matching is case-insensitive and anything
  /// unrecognized is a static library.
  pub fn from_name(name: &str) -> Self {
    match name.to_lowercase().as_str() {
      "executable" => ModuleType::Executable,
      "shared_library" | "sharedlibrary" | "shared" => ModuleType::SharedLibrary,
      _ => ModuleType::StaticLibrary,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      ModuleType::Executable => "executable",
      ModuleType::StaticLibrary => "static_library",
      ModuleType::SharedLibrary => "shared_library",
    }
  }
}

impl fmt::Display for ModuleType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Immutable description of one buildable module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
  pub name: String,
  /// Directory containing the module's `.build` file.
  pub directory: PathBuf,
  #[serde(rename = "type")]
  pub module_type: ModuleType,
  /// Source patterns, unexpanded.
  pub sources: Vec<String>,
  pub public_includes: Vec<String>,
  pub private_includes: Vec<String>,
  pub defines: Vec<String>,
  /// Names of modules this one depends on, in declaration order.
  pub dependencies: Vec<String>,
}

impl ModuleDescriptor {
  /// An empty static library, the descriptor of `module <name> {}`.
  pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
    Self {
      name: name.into(),
      directory: directory.into(),
      module_type: ModuleType::default(),
      sources: Vec::new(),
      public_includes: Vec::new(),
      private_includes: Vec::new(),
      defines: Vec::new(),
      dependencies: Vec::new(),
    }
  }

  /// Builder-style helper, mostly useful in tests.
  pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.dependencies = dependencies.into_iter().map(Into::into).collect();
    self
  }
}
