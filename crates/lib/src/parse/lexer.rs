//! Lexical analysis of `.build` source text.
//!
//! The lexer works directly on the borrowed source and hands out one token at
//! a time, either through [`Lexer::next_token`] or by iterating the lexer.
//! It owns all of its state, so any number of lexers can run concurrently.

use super::error::LexError;
use super::token::{Location, Token, TokenKind};

/// Tokenizes an entire source string.
///
/// On success the returned vector ends with exactly one
/// [`TokenKind::EndOfFile`] token.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexError> {
  Lexer::new(source).tokenize()
}

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
  source: &'a str,
  /// Byte offset of the next unread character.
  offset: usize,
  /// Human-readable position of the next unread character.
  location: Location,
  /// Set once end-of-file or an error has been produced by the iterator.
  done: bool,
}

impl<'a> Lexer<'a> {
  pub fn new(source: &'a str) -> Self {
    Self {
      source,
      offset: 0,
      location: Location::start(),
      done: false,
    }
  }

  /// Consumes the lexer and collects every token up to and including
  /// end-of-file.
  pub fn tokenize(self) -> Result<Vec<Token<'a>>, LexError> {
    self.collect()
  }

  /// Returns the next token. Once the input is exhausted this keeps returning
  /// end-of-file tokens at the final location.
  pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
    self.skip_whitespace_and_comments()?;

    let start = self.location;
    let Some(current) = self.peek() else {
      return Ok(Token::eof(start));
    };

    if current.is_alphabetic() || current == '_' {
      return Ok(self.read_identifier_or_keyword(start));
    }

    if current == '"' {
      return self.read_string(start);
    }

    Ok(self.read_symbol(start))
  }

  fn rest(&self) -> &'a str {
    &self.source[self.offset..]
  }

  fn peek(&self) -> Option<char> {
    self.rest().chars().next()
  }

  fn peek_second(&self) -> Option<char> {
    self.rest().chars().nth(1)
  }

  /// Consumes one character, keeping line and column in sync.
  fn bump(&mut self) -> Option<char> {
    let c = self.peek()?;
    self.offset += c.len_utf8();

    if c == '\n' {
      self.location.line += 1;
      self.location.column = 1;
    } else {
      self.location.column += 1;
    }

    Some(c)
  }

  fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
    while let Some(current) = self.peek() {
      if current.is_whitespace() {
        self.bump();
        continue;
      }

      if current == '/' {
        match self.peek_second() {
          Some('/') => {
            self.skip_line_comment();
            continue;
          }
          Some('*') => {
            self.skip_block_comment()?;
            continue;
          }
          _ => {}
        }
      }

      break;
    }

    Ok(())
  }

  /// Skips up to, but not including, the terminating newline.
  fn skip_line_comment(&mut self) {
    while let Some(c) = self.peek() {
      if c == '\n' {
        break;
      }
      self.bump();
    }
  }

  fn skip_block_comment(&mut self) -> Result<(), LexError> {
    // Opening "/*"
    self.bump();
    self.bump();

    loop {
      match (self.peek(), self.peek_second()) {
        (Some('*'), Some('/')) => {
          self.bump();
          self.bump();
          return Ok(());
        }
        (Some(_), Some(_)) => {
          self.bump();
        }
        _ => {
          return Err(LexError::UnterminatedComment {
            location: self.location,
          });
        }
      }
    }
  }

  fn read_identifier_or_keyword(&mut self, start: Location) -> Token<'a> {
    let begin = self.offset;

    while let Some(c) = self.peek() {
      if !c.is_alphanumeric() && c != '_' {
        break;
      }
      self.bump();
    }

    let text = &self.source[begin..self.offset];
    Token::new(TokenKind::from_word(text), text, start)
  }

  fn read_string(&mut self, start: Location) -> Result<Token<'a>, LexError> {
    // Opening quote
    self.bump();
    let begin = self.offset;

    loop {
      match self.peek() {
        None | Some('\n') => return Err(LexError::UnterminatedString { location: start }),
        Some('"') => {
          let text = &self.source[begin..self.offset];
          self.bump();
          return Ok(Token::new(TokenKind::String, text, start));
        }
        Some(_) => {
          self.bump();
        }
      }
    }
  }

  fn read_symbol(&mut self, start: Location) -> Token<'a> {
    let begin = self.offset;
    let kind = self.bump().map_or(TokenKind::EndOfFile, TokenKind::from_symbol);

    Token::new(kind, &self.source[begin..self.offset], start)
  }
}

impl<'a> Iterator for Lexer<'a> {
  type Item = Result<Token<'a>, LexError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }

    let result = self.next_token();
    if !matches!(result, Ok(ref token) if token.kind != TokenKind::EndOfFile) {
      self.done = true;
    }

    Some(result)
  }
}
