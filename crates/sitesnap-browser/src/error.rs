//! Error types for browser capture operations.
//!
//! The hierarchy distinguishes the failure modes the capture run treats
//! differently: fatal configuration errors, missing-browser conditions that
//! degrade the run to placeholder mode, and per-navigation failures that are
//! recovered target by target.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// The main error type for all browser capture operations.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// An explicitly configured executable path does not exist on disk.
    ///
    /// The only fatal configuration error; every other failure mode degrades
    /// the run to placeholder-only mode instead.
    #[error("configured browser executable does not exist: {}", .0.display())]
    ConfiguredExecutableMissing(PathBuf),

    /// Downloading a Chromium revision failed.
    ///
    /// Raised when no local executable was found and the fetcher fallback
    /// could not produce one either (offline, blocked download, full disk).
    #[error("failed to download a Chromium revision: {0}")]
    FetchFailed(String),

    /// Failed to launch the browser process.
    #[error("failed to launch browser: {reason}")]
    LaunchFailed {
        /// Human-readable reason for the launch failure
        reason: String,
        /// Optional underlying error that caused the failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to establish or use the Chrome DevTools Protocol connection.
    #[error("CDP connection failed: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed.
    #[error("navigation to '{url}' failed: {reason}")]
    NavigationFailed {
        /// The URL that failed to load
        url: String,
        /// Reason for the navigation failure
        reason: String,
    },

    /// Navigation did not complete within the page-load timeout.
    #[error("navigation to '{url}' did not complete within {timeout:?}")]
    NavigationTimeout {
        /// The URL that was being loaded
        url: String,
        /// The page-load timeout that elapsed
        timeout: Duration,
    },

    /// A wait condition was not satisfied within its timeout.
    #[error("wait condition '{condition}' timed out after {timeout:?}")]
    WaitTimeout {
        /// Description of the condition that timed out
        condition: String,
        /// How long we waited before timing out
        timeout: Duration,
    },

    /// JavaScript execution in the page context failed.
    #[error("JavaScript execution failed: {0}")]
    ScriptExecutionFailed(String),

    /// An operation was attempted on a closed browser instance.
    #[error("browser instance is already closed")]
    AlreadyClosed,

    /// Wraps errors from the chromiumoxide library.
    #[error("chromiumoxide error: {0}")]
    ChromiumOxide(#[from] chromiumoxide::error::CdpError),

    /// Generic I/O errors (file access, cache directories, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
