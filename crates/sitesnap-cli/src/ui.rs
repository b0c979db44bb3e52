//! Status message helpers for terminal output.
//!
//! Progress and failure messages go to standard output; tracing carries the
//! diagnostic detail separately.

use owo_colors::OwoColorize;

/// Print a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message.
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}
