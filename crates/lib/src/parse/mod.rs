//! The `.build` language front end.
//!
//! `source text → lexer → tokens → parser → AST → descriptor builder`.
//!
//! Every stage is a pure function of its input and keeps no shared state, so
//! [`parse_module`] can run for many files at once.

pub mod ast;
pub mod descriptor;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

use std::path::PathBuf;

use tracing::trace;

use crate::module::ModuleDescriptor;

pub use descriptor::build_descriptor;
pub use error::{LexError, ParseError, SyntaxError};
pub use lexer::{Lexer, lex};
pub use parser::parse;
pub use token::{Located, Location, Token, TokenKind};

/// Parses the source of one `.build` file into a descriptor.
///
/// `name` and `directory` are supplied by the caller (usually derived from the
/// file path); the name written after `module` in the source is not used.
///
/// # Example
///
/// ```
/// use lumen_lib::module::ModuleType;
/// use lumen_lib::parse::parse_module;
///
/// let module = parse_module("Game", "Examples/Game", "module Game { type = executable deps = [Engine] }")?;
/// assert_eq!(module.module_type, ModuleType::Executable);
/// assert_eq!(module.dependencies, vec!["Engine"]);
/// # Ok::<(), lumen_lib::parse::ParseError>(())
/// ```
pub fn parse_module(
  name: &str,
  directory: impl Into<PathBuf>,
  source: &str,
) -> Result<ModuleDescriptor, ParseError> {
  let tokens = lex(source)?;
  trace!(module = name, tokens = tokens.len(), "lexed build file");

  let ast = parse(&tokens)?;
  Ok(build_descriptor(name, directory, &ast))
}
