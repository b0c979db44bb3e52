//! Browser lifecycle management and session establishment.
//!
//! One capture run uses one browser session. [`CaptureBrowser`] launches
//! Chrome, drives the CDP event handler, and guarantees the process is
//! closed once: explicitly via [`CaptureBrowser::close`], or by Drop if
//! the run panics. [`establish`] is the capability-detection step in front
//! of it: it resolves an executable and reports a tri-state outcome so the
//! caller can decide between real captures and placeholder-only mode.

use crate::error::{BrowserError, Result};
use crate::page::CapturePage;
use crate::resolver;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Configuration for launching a capture browser.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run without a visible window (default: true).
    pub headless: bool,

    /// Browser window size (default: 1920x1080).
    pub window_size: (u32, u32),

    /// Additional Chrome arguments.
    pub args: Vec<String>,

    /// Browser executable to launch (None = chromiumoxide auto-detect).
    pub executable: Option<PathBuf>,
}

impl SessionConfig {
    /// Creates a new config with defaults for headless capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the browser executable to launch.
    #[must_use]
    pub fn with_executable(mut self, path: PathBuf) -> Self {
        self.executable = Some(path);
        self
    }

    /// Converts to chromiumoxide `BrowserConfig`.
    #[allow(clippy::result_large_err)]
    fn to_browser_config(&self) -> Result<BrowserConfig> {
        let mut config = BrowserConfig::builder();

        if self.headless {
            config = config.arg("--headless");
        }

        config = config.arg(format!(
            "--window-size={},{}",
            self.window_size.0, self.window_size.1
        ));

        for arg in &self.args {
            config = config.arg(arg.clone());
        }

        if let Some(path) = &self.executable {
            config = config.chrome_executable(path.clone());
        }

        config.build().map_err(|e| BrowserError::LaunchFailed {
            reason: format!("invalid browser configuration: {e}"),
            source: None,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1920, 1080),
            args: vec![
                // The capture host is typically a container; the sandbox
                // needs user namespaces and /dev/shm is tiny there.
                "--no-sandbox".to_string(),
                "--disable-dev-shm-usage".to_string(),
                "--disable-gpu".to_string(),
                "--disable-software-rasterizer".to_string(),
            ],
            executable: None,
        }
    }
}

/// Outcome of trying to bring up a capture session.
///
/// Only a bad explicit executable override is a hard error; every other
/// failure mode is reported here so the caller can degrade to
/// placeholder-only mode instead of aborting the run.
pub enum SessionAvailability {
    /// A session is up and ready for captures.
    Available(CaptureBrowser),

    /// No browser executable could be obtained (nothing local, download
    /// fallback failed).
    MissingBrowser(BrowserError),

    /// An executable exists but the session could not be started.
    Unavailable(BrowserError),
}

/// Resolves a browser executable and launches a capture session.
///
/// # Errors
///
/// Returns an error only for the fatal configuration case: an explicit
/// executable override pointing at a nonexistent path. All other failures
/// are folded into the returned [`SessionAvailability`].
pub async fn establish(
    config: SessionConfig,
    executable_override: Option<PathBuf>,
) -> Result<SessionAvailability> {
    let resolved = match resolver::resolve(executable_override).await {
        Ok(resolved) => resolved,
        Err(err @ BrowserError::ConfiguredExecutableMissing(_)) => return Err(err),
        Err(err) => return Ok(SessionAvailability::MissingBrowser(err)),
    };

    info!(
        path = %resolved.path.display(),
        source = ?resolved.source,
        "resolved browser executable"
    );

    match CaptureBrowser::launch(config.with_executable(resolved.path)).await {
        Ok(browser) => Ok(SessionAvailability::Available(browser)),
        Err(err) => Ok(SessionAvailability::Unavailable(err)),
    }
}

/// A managed browser instance for the capture run.
///
/// Wraps the browser process, handles lifecycle, and creates the page used
/// across all targets.
///
/// # Resource Management
///
/// `CaptureBrowser` implements Drop to kill the browser process if not
/// explicitly closed, but explicit [`close`](Self::close) is preferred:
/// Drop is synchronous and cannot await the graceful shutdown.
pub struct CaptureBrowser {
    inner: Arc<Mutex<Option<Browser>>>,
}

impl CaptureBrowser {
    /// Launches a new browser instance with the given configuration.
    ///
    /// Spawns the Chrome process, establishes the CDP connection, and
    /// starts the task that drains CDP events.
    ///
    /// # Errors
    ///
    /// Returns `LaunchFailed` if Chrome is not installed, not executable,
    /// or fails to start.
    pub async fn launch(config: SessionConfig) -> Result<Self> {
        debug!("launching browser with config: {:?}", config);

        let browser_config = config.to_browser_config()?;

        let (browser, mut handler) =
            Browser::launch(browser_config)
                .await
                .map_err(|e| BrowserError::LaunchFailed {
                    reason: "failed to launch Chrome process".to_string(),
                    source: Some(Box::new(e)),
                })?;

        // chromiumoxide requires the handler stream to be drained for any
        // CDP traffic to make progress.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("browser handler error: {}", e);
                }
            }
        });

        debug!("browser launched");

        Ok(Self {
            inner: Arc::new(Mutex::new(Some(browser))),
        })
    }

    /// Creates the browser page (tab) used for captures.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyClosed` if the browser has been closed, or
    /// `ConnectionFailed` if the tab cannot be created.
    pub async fn new_page(&self) -> Result<CapturePage> {
        let browser = self.inner.lock().await;

        let browser = browser.as_ref().ok_or(BrowserError::AlreadyClosed)?;

        let chrome_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;

        Ok(CapturePage::new(chrome_page))
    }

    /// Closes the browser and kills the Chrome process.
    ///
    /// Closing twice is not possible: the handle is consumed, and the inner
    /// browser is taken out of its slot the first time.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser fails to close gracefully.
    pub async fn close(self) -> Result<()> {
        let mut browser_guard = self.inner.lock().await;

        if let Some(mut browser) = browser_guard.take() {
            debug!("closing browser");
            browser
                .close()
                .await
                .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
        }

        Ok(())
    }

    /// Returns true if the browser has been closed.
    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}

impl Drop for CaptureBrowser {
    fn drop(&mut self) {
        // Can't await in Drop; chromiumoxide's Browser::drop kills the
        // Chrome process when the inner handle goes away. Only warn when
        // the session was actually left open.
        if let Ok(guard) = self.inner.try_lock() {
            if guard.is_some() {
                warn!("capture browser dropped without explicit close(), killing Chrome via Drop");
            }
        }
    }
}
