//! CLI output formatting utilities.
//!
//! Colored status lines with Unicode symbols, diagnostic rendering and JSON
//! output. Results go to stdout; diagnostics and errors go to stderr.

use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

use lumen_lib::diagnostics::{Diagnostic, Severity};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

/// Informational line on stderr, so it never mixes with command output.
pub fn print_note(message: &str) {
  eprintln!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stderr, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}

/// Prints a diagnostic with its file shown relative to `root` when possible.
pub fn print_diagnostic(diagnostic: &Diagnostic, root: &Path) {
  let line = relative_to(diagnostic, root).to_string();
  match diagnostic.severity {
    Severity::Error => print_error(&line),
    Severity::Warning => print_warning(&line),
    Severity::Info => print_note(&line),
  }
}

fn relative_to(diagnostic: &Diagnostic, root: &Path) -> Diagnostic {
  let mut diagnostic = diagnostic.clone();
  if let Some(relative) = diagnostic.file.as_deref().and_then(|file| file.strip_prefix(root).ok()) {
    diagnostic.file = Some(relative.to_path_buf());
  }
  diagnostic
}
