//! Implementation of the `lumen parse` command.

use std::path::Path;

use anyhow::Result;

use lumen_lib::load::load_module;
use lumen_lib::module::ModuleDescriptor;

use crate::output::{OutputFormat, print_json, print_stat, print_success};

/// Parses a single build file and prints the resulting descriptor.
pub fn cmd_parse(file: &Path, output: OutputFormat) -> Result<()> {
  let module = load_module(file)?;

  if output.is_json() {
    print_json(&module)?;
  } else {
    print_descriptor(&module);
  }

  Ok(())
}

fn print_descriptor(module: &ModuleDescriptor) {
  print_success(&format!("module {}", module.name));
  print_stat("Type", module.module_type.as_str());
  print_stat("Directory", &module.directory.display().to_string());
  print_stat("Sources", &module.sources.join(", "));
  print_stat("Public includes", &module.public_includes.join(", "));
  print_stat("Private includes", &module.private_includes.join(", "));
  print_stat("Defines", &module.defines.join(", "));
  print_stat("Dependencies", &module.dependencies.join(", "));
}
