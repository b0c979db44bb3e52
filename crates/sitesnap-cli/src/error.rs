//! Error types for the capture run.

use sitesnap_browser::BrowserError;
use thiserror::Error;

/// Top-level error type for the capture run.
///
/// Per-target capture failures never surface here; they are recovered at
/// the target scope and turned into placeholder artifacts. What remains is
/// the handful of failures the run cannot absorb.
#[derive(Debug, Error)]
pub enum CliError {
    /// A browser failure outside per-target recovery, i.e. the fatal
    /// configuration error from the executable resolver.
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),

    /// A placeholder artifact could not be written, so the guarantee of one
    /// artifact set per target no longer holds.
    #[error("failed to write placeholder for '{name}': {source}")]
    Placeholder {
        /// Target name the placeholder was meant for
        name: String,
        /// The underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Other filesystem failures (output directory creation).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for the capture CLI.
pub type Result<T> = std::result::Result<T, CliError>;
