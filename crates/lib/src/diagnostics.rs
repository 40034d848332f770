//! Collected, user-facing diagnostics.
//!
//! Loading keeps going after a file fails, so problems are gathered into a
//! [`Diagnostics`] collection and reported together. Every diagnostic is also
//! emitted as a `tracing` event.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::debug;

use crate::parse::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Info,
  Warning,
  Error,
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Severity::Info => "info",
      Severity::Warning => "warning",
      Severity::Error => "error",
    })
  }
}

/// A single message, optionally tied to a file and a position in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
  pub severity: Severity,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file: Option<PathBuf>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<Location>,
}

impl Diagnostic {
  pub fn new(severity: Severity, message: impl Into<String>) -> Self {
    Self {
      severity,
      message: message.into(),
      file: None,
      location: None,
    }
  }

  pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
    self.file = Some(file.into());
    self
  }

  pub fn at(mut self, location: Location) -> Self {
    self.location = Some(location);
    self
  }

  pub fn is_error(&self) -> bool {
    self.severity == Severity::Error
  }
}

/// `path:line:column: severity: message`, dropping whatever is unknown.
impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match (&self.file, self.location) {
      (Some(file), Some(location)) => write!(f, "{}:{}: ", file.display(), location)?,
      (Some(file), None) => write!(f, "{}: ", file.display())?,
      (None, _) => {}
    }
    write!(f, "{}: {}", self.severity, self.message)
  }
}

/// Thread-safe, append-only diagnostic collection.
///
/// Insertion order is preserved, but diagnostics pushed from concurrent tasks
/// have no defined relative order.
#[derive(Debug, Default)]
pub struct Diagnostics {
  entries: Mutex<Vec<Diagnostic>>,
}

impl Diagnostics {
  pub fn new() -> Self {
    Self::default()
  }

  fn entries(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
    // A panic while holding the lock cannot leave a Vec half-pushed.
    self.entries.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn push(&self, diagnostic: Diagnostic) {
    debug!(severity = %diagnostic.severity, %diagnostic, "diagnostic recorded");
    self.entries().push(diagnostic);
  }

  pub fn info(&self, message: impl Into<String>) {
    self.push(Diagnostic::new(Severity::Info, message));
  }

  pub fn warning(&self, message: impl Into<String>) {
    self.push(Diagnostic::new(Severity::Warning, message));
  }

  pub fn error(&self, message: impl Into<String>) {
    self.push(Diagnostic::new(Severity::Error, message));
  }

  pub fn has_errors(&self) -> bool {
    self.entries().iter().any(Diagnostic::is_error)
  }

  pub fn error_count(&self) -> usize {
    self.entries().iter().filter(|d| d.is_error()).count()
  }

  pub fn len(&self) -> usize {
    self.entries().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries().is_empty()
  }

  /// A snapshot of everything recorded so far.
  pub fn all(&self) -> Vec<Diagnostic> {
    self.entries().clone()
  }
}
