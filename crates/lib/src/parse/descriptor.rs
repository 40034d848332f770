//! Conversion from a parsed [`ModuleNode`] into a [`ModuleDescriptor`].
//!
//! The conversion never fails. Keys are matched case-insensitively, later
//! assignments replace earlier ones, unknown keys are ignored and values of
//! the wrong shape contribute nothing.

use std::path::PathBuf;

use tracing::debug;

use super::ast::{Element, ModuleNode, Value};
use super::token::Located;
use crate::module::{ModuleDescriptor, ModuleType};

pub fn build_descriptor(name: &str, directory: impl Into<PathBuf>, ast: &ModuleNode<'_>) -> ModuleDescriptor {
  let mut descriptor = ModuleDescriptor::new(name, directory);

  for property in &ast.properties {
    let value = &property.value;

    match property.name.to_lowercase().as_str() {
      "type" => descriptor.module_type = module_type(value),
      "sources" => descriptor.sources = string_list(value),
      "public_includes" => descriptor.public_includes = string_list(value),
      "private_includes" => descriptor.private_includes = string_list(value),
      "defines" => descriptor.defines = string_list(value),
      "deps" => descriptor.dependencies = name_list(value),
      _ => debug!(
        module = name,
        property = property.name,
        location = %property.location(),
        "ignoring unknown property"
      ),
    }
  }

  descriptor
}

fn module_type(value: &Value<'_>) -> ModuleType {
  match value {
    Value::Identifier(node) => ModuleType::from_name(node.value),
    Value::String(node) => ModuleType::from_name(node.value),
    Value::Array(_) => ModuleType::default(),
  }
}

/// String literals only; bare words are dropped.
fn string_list(value: &Value<'_>) -> Vec<String> {
  match value {
    Value::String(node) => vec![node.value.to_string()],
    Value::Array(array) => array
      .elements
      .iter()
      .filter_map(|element| match element {
        Element::String(node) => Some(node.value.to_string()),
        Element::Identifier(_) => None,
      })
      .collect(),
    Value::Identifier(_) => Vec::new(),
  }
}

/// Module names may be written quoted or unquoted.
fn name_list(value: &Value<'_>) -> Vec<String> {
  match value {
    Value::Identifier(node) => vec![node.value.to_string()],
    Value::String(node) => vec![node.value.to_string()],
    Value::Array(array) => array.elements.iter().map(|element| element.text().to_string()).collect(),
  }
}
