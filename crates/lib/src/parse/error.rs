//! Errors produced while turning `.build` source into a descriptor.
//!
//! Every error is fatal for the file being parsed and carries the file-relative
//! location it refers to. There is no recovery: the first error wins.

use thiserror::Error;

use super::token::{Located, Location};

/// Lexical errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
  /// A string literal hit a newline or end-of-input before its closing quote.
  /// The location is that of the opening quote.
  #[error("unterminated string")]
  UnterminatedString { location: Location },

  /// Input ended inside a `/* ... */` comment.
  #[error("unterminated block comment")]
  UnterminatedComment { location: Location },
}

impl Located for LexError {
  fn location(&self) -> Location {
    match self {
      LexError::UnterminatedString { location } | LexError::UnterminatedComment { location } => *location,
    }
  }
}

/// A grammar violation, e.g. "expected '=', got string".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
  pub message: String,
  pub location: Location,
}

impl SyntaxError {
  pub fn new(message: impl Into<String>, location: Location) -> Self {
    Self {
      message: message.into(),
      location,
    }
  }
}

impl Located for SyntaxError {
  fn location(&self) -> Location {
    self.location
  }
}

/// Any failure of the single-file entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error(transparent)]
  Lex(#[from] LexError),

  #[error(transparent)]
  Syntax(#[from] SyntaxError),
}

impl Located for ParseError {
  fn location(&self) -> Location {
    match self {
      ParseError::Lex(err) => err.location(),
      ParseError::Syntax(err) => err.location(),
    }
  }
}
