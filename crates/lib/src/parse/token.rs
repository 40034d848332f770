//! Tokens and source locations for the `.build` language.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A human-readable position in a source file. Both fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
  pub line: usize,
  pub column: usize,
}

impl Location {
  pub fn new(line: usize, column: usize) -> Self {
    Self { line, column }
  }

  /// The location of the first character of a file.
  pub fn start() -> Self {
    Self::new(1, 1)
  }
}

impl Default for Location {
  fn default() -> Self {
    Self::start()
  }
}

impl fmt::Display for Location {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.line, self.column)
  }
}

/// Anything that can be mapped back to a position in the source.
pub trait Located {
  fn location(&self) -> Location;
}

/// The type of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  // Reserved keywords
  Module,
  Type,
  Sources,
  PublicIncludes,
  PrivateIncludes,
  Defines,
  Deps,

  Identifier,
  String,

  LeftBrace,
  RightBrace,
  LeftBracket,
  RightBracket,
  Equals,
  Comma,

  EndOfFile,
  /// Any character the language does not recognize.
  Invalid,
}

impl TokenKind {
  /// Maps an identifier lexeme to its keyword kind. Matching is exact and
  /// case-sensitive; everything else is a plain identifier.
  pub fn from_word(word: &str) -> Self {
    match word {
      "module" => TokenKind::Module,
      "type" => TokenKind::Type,
      "sources" => TokenKind::Sources,
      "public_includes" => TokenKind::PublicIncludes,
      "private_includes" => TokenKind::PrivateIncludes,
      "defines" => TokenKind::Defines,
      "deps" => TokenKind::Deps,
      _ => TokenKind::Identifier,
    }
  }

  /// Maps a punctuation character to its kind, or `Invalid`.
  pub fn from_symbol(c: char) -> Self {
    match c {
      '{' => TokenKind::LeftBrace,
      '}' => TokenKind::RightBrace,
      '[' => TokenKind::LeftBracket,
      ']' => TokenKind::RightBracket,
      '=' => TokenKind::Equals,
      ',' => TokenKind::Comma,
      _ => TokenKind::Invalid,
    }
  }

  /// Keywords that may appear on the left-hand side of a property.
  pub fn is_property_keyword(self) -> bool {
    matches!(
      self,
      TokenKind::Type
        | TokenKind::Sources
        | TokenKind::PublicIncludes
        | TokenKind::PrivateIncludes
        | TokenKind::Defines
        | TokenKind::Deps
    )
  }

  pub fn as_str(self) -> &'static str {
    match self {
      TokenKind::Module => "'module'",
      TokenKind::Type => "'type'",
      TokenKind::Sources => "'sources'",
      TokenKind::PublicIncludes => "'public_includes'",
      TokenKind::PrivateIncludes => "'private_includes'",
      TokenKind::Defines => "'defines'",
      TokenKind::Deps => "'deps'",
      TokenKind::Identifier => "identifier",
      TokenKind::String => "string",
      TokenKind::LeftBrace => "'{'",
      TokenKind::RightBrace => "'}'",
      TokenKind::LeftBracket => "'['",
      TokenKind::RightBracket => "']'",
      TokenKind::Equals => "'='",
      TokenKind::Comma => "','",
      TokenKind::EndOfFile => "end of file",
      TokenKind::Invalid => "invalid character",
    }
  }
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A lexeme with its kind and the location of its first character.
///
/// `text` borrows from the source. For strings it excludes the quotes; for
/// end-of-file it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
  pub kind: TokenKind,
  pub text: &'a str,
  pub location: Location,
}

impl<'a> Token<'a> {
  pub fn new(kind: TokenKind, text: &'a str, location: Location) -> Self {
    Self { kind, text, location }
  }

  pub fn eof(location: Location) -> Self {
    Self::new(TokenKind::EndOfFile, "", location)
  }

  pub fn line(&self) -> usize {
    self.location.line
  }

  pub fn column(&self) -> usize {
    self.location.column
  }
}

impl Located for Token<'_> {
  fn location(&self) -> Location {
    self.location
  }
}

impl fmt::Display for Token<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}] '{}' at ({})", self.kind, self.text, self.location)
  }
}
