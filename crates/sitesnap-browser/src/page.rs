//! Page-level browser operations.
//!
//! [`CapturePage`] wraps a chromiumoxide page (tab) and exposes exactly the
//! operations the capture flow needs: bounded navigation, content-height
//! probing, scrolling, viewport override, and PNG screenshots. The same
//! operations are available behind the [`PageSurface`] trait so the flow
//! can be exercised against mocked pages in tests.

use crate::error::{BrowserError, Result};
use crate::wait::{wait_for_result, WaitConfig};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page as ChromePage, ScreenshotParams};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Upper bound on a single page navigation, including the document-ready
/// wait.
pub const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Page operations needed by the capture flow.
///
/// Factoring these behind a trait keeps the scroll-convergence loop and the
/// per-target capture sequence testable with simulated height sequences and
/// injected failures.
#[async_trait]
pub trait PageSurface: Send + Sync {
    /// Navigates to `url` and waits for the document to finish loading.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Reads the page's full scrollable content height in CSS pixels.
    async fn content_height(&self) -> Result<i64>;

    /// Scrolls to the bottom of the page.
    async fn scroll_to_bottom(&self) -> Result<()>;

    /// Overrides the emulated viewport size.
    async fn set_viewport(&self, width: u32, height: u32) -> Result<()>;

    /// Writes a PNG screenshot of the current viewport to `path`.
    async fn save_screenshot(&self, path: &Path) -> Result<()>;
}

/// A browser page (tab) used for captures.
#[derive(Debug, Clone)]
pub struct CapturePage {
    inner: ChromePage,
}

impl CapturePage {
    /// Wraps a chromiumoxide page. Called by
    /// [`CaptureBrowser`](crate::browser::CaptureBrowser); users don't
    /// construct pages directly.
    pub(crate) fn new(page: ChromePage) -> Self {
        Self { inner: page }
    }

    /// Navigates to an absolute URL and waits for the document to be ready.
    ///
    /// The whole operation is bounded by [`PAGE_LOAD_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the load fails outright and
    /// `NavigationTimeout` if it does not complete in time.
    pub async fn navigate(&self, url: &str) -> Result<()> {
        let attempt = async {
            self.inner
                .goto(url)
                .await
                .map_err(|e| BrowserError::NavigationFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;

            self.wait_for_load().await
        };

        match tokio::time::timeout(PAGE_LOAD_TIMEOUT, attempt).await {
            Ok(result) => result,
            Err(_) => Err(BrowserError::NavigationTimeout {
                url: url.to_string(),
                timeout: PAGE_LOAD_TIMEOUT,
            }),
        }
    }

    /// Waits until `document.readyState` reports `complete`.
    async fn wait_for_load(&self) -> Result<()> {
        wait_for_result(
            || {
                let page = self.inner.clone();
                async move {
                    let result = page
                        .evaluate("document.readyState")
                        .await
                        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

                    let ready = result
                        .value()
                        .and_then(|v| v.as_str())
                        .is_some_and(|s| s == "complete");

                    Ok(ready)
                }
            },
            WaitConfig::with_timeout(PAGE_LOAD_TIMEOUT),
            "document ready",
        )
        .await
    }

    /// Executes JavaScript in the page context and returns the result.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails or the result cannot be
    /// deserialized into `T`.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Reads `document.body.scrollHeight`.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn content_height(&self) -> Result<i64> {
        self.evaluate("document.body.scrollHeight").await
    }

    /// Scrolls the window to the bottom of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn scroll_to_bottom(&self) -> Result<()> {
        self.inner
            .evaluate("window.scrollTo(0, document.body.scrollHeight)")
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

        Ok(())
    }

    /// Overrides the emulated viewport via CDP device metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the CDP command fails.
    pub async fn set_viewport(&self, width: u32, height: u32) -> Result<()> {
        let params = SetDeviceMetricsOverrideParams::builder()
            .width(i64::from(width))
            .height(i64::from(height))
            .device_scale_factor(1.0)
            .mobile(false)
            .build()
            .map_err(BrowserError::ScriptExecutionFailed)?;

        debug!(width, height, "overriding viewport");
        self.inner.execute(params).await?;

        Ok(())
    }

    /// Captures the current viewport as PNG and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the capture or the file write fails.
    pub async fn save_screenshot(&self, path: &Path) -> Result<()> {
        self.inner
            .save_screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .build(),
                path,
            )
            .await?;

        Ok(())
    }
}

#[async_trait]
impl PageSurface for CapturePage {
    async fn navigate(&self, url: &str) -> Result<()> {
        CapturePage::navigate(self, url).await
    }

    async fn content_height(&self) -> Result<i64> {
        CapturePage::content_height(self).await
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        CapturePage::scroll_to_bottom(self).await
    }

    async fn set_viewport(&self, width: u32, height: u32) -> Result<()> {
        CapturePage::set_viewport(self, width, height).await
    }

    async fn save_screenshot(&self, path: &Path) -> Result<()> {
        CapturePage::save_screenshot(self, path).await
    }
}
