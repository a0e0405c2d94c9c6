//! # Output Formatting
//!
//! Colored status lines and JSON rendering for command results.

use owo_colors::OwoColorize;
use serde::Serialize;

/// Print a success message
pub fn print_success(message: &str) {
  println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  println!("{} {}", "ℹ".blue().bold(), message);
}

/// Render a value as pretty-printed JSON
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
  serde_json::to_string_pretty(value)
}
