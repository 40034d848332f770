//! Recursive-descent parser for `.build` files.
//!
//! Grammar:
//!
//! ```text
//! module   := 'module' IDENT '{' property* '}'
//! property := (keyword | IDENT) '=' value
//! value    := STRING | IDENT | array
//! array    := '[' (elem (','? elem)* ','?)? ']'
//! elem     := STRING | IDENT
//! ```
//!
//! Parsing stops at the first error. Tokens after the closing brace of the
//! module are not inspected.

use super::ast::{ArrayNode, Element, IdentifierNode, ModuleNode, PropertyNode, StringNode, Value};
use super::error::SyntaxError;
use super::token::{Location, Token, TokenKind};

/// Parses a token sequence (as produced by [`lex`](super::lexer::lex)) into a
/// module AST.
pub fn parse<'a>(tokens: &[Token<'a>]) -> Result<ModuleNode<'a>, SyntaxError> {
  Parser::new(tokens).parse_module()
}

/// Human-readable description of a token for error messages.
fn describe(token: &Token<'_>) -> String {
  match token.kind {
    TokenKind::Identifier => format!("identifier '{}'", token.text),
    TokenKind::String => format!("string \"{}\"", token.text),
    TokenKind::Invalid => format!("invalid character '{}'", token.text),
    kind => kind.to_string(),
  }
}

struct Parser<'t, 'a> {
  tokens: &'t [Token<'a>],
  position: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
  fn new(tokens: &'t [Token<'a>]) -> Self {
    Self { tokens, position: 0 }
  }

  // Token helpers

  /// The token under the cursor. Reading past the end yields the last token,
  /// which is end-of-file for any lexer output.
  fn current(&self) -> Token<'a> {
    self
      .tokens
      .get(self.position)
      .or_else(|| self.tokens.last())
      .copied()
      .unwrap_or_else(|| Token::eof(Location::start()))
  }

  fn check(&self, kind: TokenKind) -> bool {
    self.current().kind == kind
  }

  fn advance(&mut self) -> Token<'a> {
    let token = self.current();
    if self.position < self.tokens.len() {
      self.position += 1;
    }
    token
  }

  fn expectation_error(&self, expected: &str) -> SyntaxError {
    let token = self.current();
    SyntaxError::new(format!("expected {}, got {}", expected, describe(&token)), token.location)
  }

  fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, SyntaxError> {
    if self.check(kind) {
      Ok(self.advance())
    } else {
      Err(self.expectation_error(kind.as_str()))
    }
  }

  // Grammar rules

  fn parse_module(&mut self) -> Result<ModuleNode<'a>, SyntaxError> {
    let keyword = self.expect(TokenKind::Module)?;
    let name = self.expect(TokenKind::Identifier)?;
    self.expect(TokenKind::LeftBrace)?;

    let mut properties = Vec::new();
    while !self.check(TokenKind::RightBrace) && !self.check(TokenKind::EndOfFile) {
      properties.push(self.parse_property()?);
    }

    self.expect(TokenKind::RightBrace)?;

    Ok(ModuleNode {
      name: name.text,
      properties,
      location: keyword.location,
    })
  }

  fn parse_property(&mut self) -> Result<PropertyNode<'a>, SyntaxError> {
    let name = self.current();

    if !name.kind.is_property_keyword() && name.kind != TokenKind::Identifier {
      return Err(self.expectation_error("property name"));
    }

    self.advance();
    self.expect(TokenKind::Equals)?;
    let value = self.parse_value()?;

    Ok(PropertyNode {
      name: name.text,
      value,
      location: name.location,
    })
  }

  fn parse_value(&mut self) -> Result<Value<'a>, SyntaxError> {
    let token = self.current();

    match token.kind {
      TokenKind::LeftBracket => self.parse_array().map(Value::Array),
      TokenKind::String => {
        self.advance();
        Ok(Value::String(StringNode {
          value: token.text,
          location: token.location,
        }))
      }
      TokenKind::Identifier => {
        self.advance();
        Ok(Value::Identifier(IdentifierNode {
          value: token.text,
          location: token.location,
        }))
      }
      _ => Err(self.expectation_error("value")),
    }
  }

  fn parse_array(&mut self) -> Result<ArrayNode<'a>, SyntaxError> {
    let open = self.expect(TokenKind::LeftBracket)?;
    let mut elements = Vec::new();

    while !self.check(TokenKind::RightBracket) && !self.check(TokenKind::EndOfFile) {
      elements.push(self.parse_array_element()?);

      // Separators are optional
      if self.check(TokenKind::Comma) {
        self.advance();
      }
    }

    self.expect(TokenKind::RightBracket)?;

    Ok(ArrayNode {
      elements,
      location: open.location,
    })
  }

  fn parse_array_element(&mut self) -> Result<Element<'a>, SyntaxError> {
    let token = self.current();

    match token.kind {
      TokenKind::String => {
        self.advance();
        Ok(Element::String(StringNode {
          value: token.text,
          location: token.location,
        }))
      }
      TokenKind::Identifier => {
        self.advance();
        Ok(Element::Identifier(IdentifierNode {
          value: token.text,
          location: token.location,
        }))
      }
      _ => Err(self.expectation_error("array element")),
    }
  }
}
