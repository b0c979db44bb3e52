//! sitesnap - full-page competitor screenshot capture.
//!
//! This crate is the command-line front of sitesnap. It owns the static
//! competitor target list and the capture run itself: establish one
//! headless browser session via `sitesnap-browser`, walk the targets in
//! order, and leave exactly one artifact set per target behind: a real
//! `<name>.png`, or a `<name>.svg` + `<name>.txt` placeholder pair when the
//! capture failed.
//!
//! # Architecture
//!
//! - [`targets`] - the static (name, URL) table, declaration order preserved
//! - [`capture`] - the sequential run: session establishment, per-target
//!   capture with local error recovery, placeholder-only degraded mode
//! - [`placeholder`] - the fallback artifact writer
//! - [`cli`] / [`logger`] / [`ui`] - argument parsing, tracing setup, and
//!   status output
//! - [`error`] - thiserror-based error types for the run

pub mod capture;
pub mod cli;
pub mod error;
pub mod logger;
pub mod placeholder;
pub mod targets;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result};
