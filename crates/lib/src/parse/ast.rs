//! Abstract syntax tree for `.build` files.
//!
//! A file holds exactly one [`ModuleNode`]. Every node records the location of
//! its first token and exposes it through [`Located`]. Node text borrows from
//! the source the tokens were lexed from.

use super::token::{Located, Location};

/// The root `module <Name> { ... }` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode<'a> {
  pub name: &'a str,
  pub properties: Vec<PropertyNode<'a>>,
  /// Location of the `module` keyword.
  pub location: Location,
}

/// A `key = value` assignment inside a module block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode<'a> {
  /// The key exactly as written.
  pub name: &'a str,
  pub value: Value<'a>,
  pub location: Location,
}

/// A bare word value, e.g. `executable` or `Core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierNode<'a> {
  pub value: &'a str,
  pub location: Location,
}

/// A double-quoted value, without its quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringNode<'a> {
  pub value: &'a str,
  pub location: Location,
}

/// A bracketed list of leaf values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayNode<'a> {
  pub elements: Vec<Element<'a>>,
  /// Location of the opening bracket.
  pub location: Location,
}

/// Right-hand side of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
  Identifier(IdentifierNode<'a>),
  String(StringNode<'a>),
  Array(ArrayNode<'a>),
}

/// A leaf inside an array. Arrays do not nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
  Identifier(IdentifierNode<'a>),
  String(StringNode<'a>),
}

impl<'a> Element<'a> {
  pub fn text(&self) -> &'a str {
    match self {
      Element::Identifier(node) => node.value,
      Element::String(node) => node.value,
    }
  }
}

impl Located for ModuleNode<'_> {
  fn location(&self) -> Location {
    self.location
  }
}

impl Located for PropertyNode<'_> {
  fn location(&self) -> Location {
    self.location
  }
}

impl Located for IdentifierNode<'_> {
  fn location(&self) -> Location {
    self.location
  }
}

impl Located for StringNode<'_> {
  fn location(&self) -> Location {
    self.location
  }
}

impl Located for ArrayNode<'_> {
  fn location(&self) -> Location {
    self.location
  }
}

impl Located for Value<'_> {
  fn location(&self) -> Location {
    match self {
      Value::Identifier(node) => node.location,
      Value::String(node) => node.location,
      Value::Array(node) => node.location,
    }
  }
}

impl Located for Element<'_> {
  fn location(&self) -> Location {
    match self {
      Element::Identifier(node) => node.location,
      Element::String(node) => node.location,
    }
  }
}
