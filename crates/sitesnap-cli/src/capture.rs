//! The sequential capture run over the static target list.
//!
//! One browser session, one page, one target at a time. Per-target
//! failures are recovered locally and turned into placeholder artifacts;
//! a session that never comes up degrades the whole run to
//! placeholder-only mode. Either way, every target ends the run with
//! exactly one artifact set.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::placeholder;
use crate::targets::{Target, TARGETS};
use crate::ui;
use sitesnap_browser::{
    converge_content_height, establish, PageSurface, SessionAvailability, SessionConfig, Sleeper,
    TokioSleeper,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Tuning knobs for the per-target capture flow.
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Delay after navigation before the first height read.
    pub settle_delay: Duration,
    /// Delay between a scroll-to-bottom and the next height read.
    pub scroll_delay: Duration,
    /// Delay between the viewport resize and the screenshot.
    pub layout_delay: Duration,
    /// Upper bound on scroll rounds for pages whose height keeps changing.
    pub max_scroll_rounds: u32,
    /// Emulated viewport width for the final capture.
    pub viewport_width: u32,
    /// Extra height added below the converged content height.
    pub height_margin: u32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_secs(5),
            scroll_delay: Duration::from_secs(2),
            layout_delay: Duration::from_secs(1),
            max_scroll_rounds: 25,
            viewport_width: 1920,
            height_margin: 200,
        }
    }
}

/// What a run produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Targets that produced a real screenshot.
    pub captured: usize,
    /// Targets that fell back to a placeholder artifact.
    pub placeholders: usize,
}

/// Captures a single target: navigate, settle, converge the content
/// height, resize the viewport, screenshot.
async fn capture_target<P, S>(
    page: &P,
    sleeper: &S,
    target: &Target,
    out_dir: &Path,
    opts: &CaptureOptions,
) -> sitesnap_browser::Result<PathBuf>
where
    P: PageSurface + ?Sized,
    S: Sleeper + ?Sized,
{
    ui::info(&format!("Navigating to {}...", target.url));
    page.navigate(target.url).await?;
    sleeper.sleep(opts.settle_delay).await;

    let height =
        converge_content_height(page, sleeper, opts.scroll_delay, opts.max_scroll_rounds).await?;

    let viewport_height = u32::try_from(height.max(1))
        .unwrap_or(u32::MAX)
        .saturating_add(opts.height_margin);
    page.set_viewport(opts.viewport_width, viewport_height).await?;
    sleeper.sleep(opts.layout_delay).await;

    if !out_dir.exists() {
        std::fs::create_dir_all(out_dir)?;
    }
    let path = out_dir.join(format!("{}.png", target.name));
    debug!(path = %path.display(), "saving screenshot");
    page.save_screenshot(&path).await?;

    Ok(path)
}

/// Walks the target list, capturing each one and falling back to a
/// placeholder when a capture fails.
///
/// # Errors
///
/// Per-target capture failures are absorbed; only a failed placeholder
/// write aborts the run.
pub async fn capture_all<P, S>(
    page: &P,
    sleeper: &S,
    targets: &[Target],
    out_dir: &Path,
    opts: &CaptureOptions,
) -> Result<RunSummary>
where
    P: PageSurface + ?Sized,
    S: Sleeper + ?Sized,
{
    let mut summary = RunSummary::default();

    for target in targets {
        match capture_target(page, sleeper, target, out_dir, opts).await {
            Ok(path) => {
                ui::success(&format!("Saved screenshot to {}", path.display()));
                summary.captured += 1;
            }
            Err(err) => {
                ui::warning(&format!("Failed to capture {}: {err}", target.name));
                let artifact = placeholder::write_placeholder(out_dir, target.name, &err.to_string())
                    .map_err(|source| CliError::Placeholder {
                        name: target.name.to_string(),
                        source,
                    })?;
                debug!(image = %artifact.image.display(), "wrote placeholder");
                summary.placeholders += 1;
            }
        }
    }

    Ok(summary)
}

/// Writes a placeholder pair for every target, for runs where no capture
/// session could be established at all.
///
/// # Errors
///
/// Returns an error when a placeholder cannot be written.
pub fn write_placeholders_for_all(
    targets: &[Target],
    out_dir: &Path,
    reason: &str,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for target in targets {
        placeholder::write_placeholder(out_dir, target.name, reason).map_err(|source| {
            CliError::Placeholder {
                name: target.name.to_string(),
                source,
            }
        })?;
        summary.placeholders += 1;
    }

    Ok(summary)
}

/// Runs a full capture over the built-in target list.
///
/// # Errors
///
/// Returns an error for a bad `CHROME_BINARY` override, an output
/// directory that cannot be created, or a placeholder artifact that cannot
/// be written. Per-target capture failures and an unavailable browser only
/// show up in the summary.
pub async fn run(args: &Cli) -> Result<()> {
    std::fs::create_dir_all(&args.out_dir)?;

    let executable_override = std::env::var_os("CHROME_BINARY").map(PathBuf::from);
    let opts = CaptureOptions::default();
    let sleeper = TokioSleeper;

    let summary = match establish(SessionConfig::default(), executable_override).await? {
        SessionAvailability::Available(browser) => {
            let outcome = match browser.new_page().await {
                Ok(page) => capture_all(&page, &sleeper, TARGETS, &args.out_dir, &opts).await,
                Err(err) => {
                    ui::warning(&format!("Browser session has no usable page: {err}"));
                    write_placeholders_for_all(
                        TARGETS,
                        &args.out_dir,
                        &format!("browser page could not be created: {err}"),
                    )
                }
            };

            // Close before surfacing any run error so the Chrome process
            // never outlives the run.
            if let Err(err) = browser.close().await {
                warn!(error = %err, "browser did not close cleanly");
            }

            outcome?
        }
        SessionAvailability::MissingBrowser(err) => {
            ui::warning(&format!("No browser available, writing placeholders only: {err}"));
            write_placeholders_for_all(
                TARGETS,
                &args.out_dir,
                &format!("no browser available: {err}"),
            )?
        }
        SessionAvailability::Unavailable(err) => {
            ui::warning(&format!(
                "Browser session failed to start, writing placeholders only: {err}"
            ));
            write_placeholders_for_all(
                TARGETS,
                &args.out_dir,
                &format!("browser session failed to start: {err}"),
            )?
        }
    };

    ui::success(&format!(
        "Run complete: {} captured, {} placeholder(s)",
        summary.captured, summary.placeholders
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sitesnap_browser::BrowserError;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// A scripted page surface: fails navigation for chosen URLs, reports a
    /// fixed content height, and records viewport overrides. Screenshots
    /// are written as small marker files so artifact assertions work.
    struct ScriptedPage {
        fail_navigation_for: HashSet<&'static str>,
        height: i64,
        viewports: Mutex<Vec<(u32, u32)>>,
    }

    impl ScriptedPage {
        fn new(height: i64) -> Self {
            Self {
                fail_navigation_for: HashSet::new(),
                height,
                viewports: Mutex::new(Vec::new()),
            }
        }

        fn failing_for(mut self, url: &'static str) -> Self {
            self.fail_navigation_for.insert(url);
            self
        }
    }

    #[async_trait]
    impl PageSurface for ScriptedPage {
        async fn navigate(&self, url: &str) -> sitesnap_browser::Result<()> {
            if self.fail_navigation_for.contains(url) {
                return Err(BrowserError::NavigationFailed {
                    url: url.to_string(),
                    reason: "connection refused".to_string(),
                });
            }
            Ok(())
        }

        async fn content_height(&self) -> sitesnap_browser::Result<i64> {
            Ok(self.height)
        }

        async fn scroll_to_bottom(&self) -> sitesnap_browser::Result<()> {
            Ok(())
        }

        async fn set_viewport(&self, width: u32, height: u32) -> sitesnap_browser::Result<()> {
            self.viewports.lock().unwrap().push((width, height));
            Ok(())
        }

        async fn save_screenshot(&self, path: &Path) -> sitesnap_browser::Result<()> {
            std::fs::write(path, b"png").map_err(BrowserError::from)
        }
    }

    fn instant_options() -> CaptureOptions {
        CaptureOptions {
            settle_delay: Duration::ZERO,
            scroll_delay: Duration::ZERO,
            layout_delay: Duration::ZERO,
            ..CaptureOptions::default()
        }
    }

    const TEST_TARGETS: &[Target] = &[
        Target {
            name: "alpha",
            url: "https://alpha.test/",
        },
        Target {
            name: "bravo",
            url: "https://bravo.test/",
        },
        Target {
            name: "charlie",
            url: "https://charlie.test/",
        },
    ];

    #[tokio::test]
    async fn failed_target_falls_back_without_aborting_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let page = ScriptedPage::new(900).failing_for("https://bravo.test/");

        let summary = capture_all(&page, &TokioSleeper, TEST_TARGETS, dir.path(), &instant_options())
            .await
            .expect("run should complete");

        assert_eq!(
            summary,
            RunSummary {
                captured: 2,
                placeholders: 1
            }
        );
        assert!(dir.path().join("alpha.png").exists());
        assert!(dir.path().join("charlie.png").exists());
        assert!(!dir.path().join("bravo.png").exists());
        assert!(dir.path().join("bravo.svg").exists());
        assert!(dir.path().join("bravo.txt").exists());
    }

    #[tokio::test]
    async fn failure_replaces_a_stale_screenshot_with_a_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bravo.png"), b"stale").unwrap();
        let page = ScriptedPage::new(900).failing_for("https://bravo.test/");

        capture_all(&page, &TokioSleeper, TEST_TARGETS, dir.path(), &instant_options())
            .await
            .expect("run should complete");

        assert!(!dir.path().join("bravo.png").exists());
        assert!(dir.path().join("bravo.svg").exists());
    }

    #[tokio::test]
    async fn viewport_gets_the_margin_above_the_converged_height() {
        let dir = tempfile::tempdir().unwrap();
        let page = ScriptedPage::new(1400);

        capture_all(
            &page,
            &TokioSleeper,
            &TEST_TARGETS[..1],
            dir.path(),
            &instant_options(),
        )
        .await
        .expect("run should complete");

        let viewports = page.viewports.lock().unwrap();
        assert_eq!(viewports.as_slice(), &[(1920, 1600)]);
    }

    #[tokio::test]
    async fn all_targets_get_placeholders_when_no_session_exists() {
        let dir = tempfile::tempdir().unwrap();

        let summary =
            write_placeholders_for_all(TEST_TARGETS, dir.path(), "no browser available")
                .expect("placeholder run should complete");

        assert_eq!(
            summary,
            RunSummary {
                captured: 0,
                placeholders: 3
            }
        );
        for target in TEST_TARGETS {
            assert!(dir.path().join(format!("{}.svg", target.name)).exists());
            assert!(dir.path().join(format!("{}.txt", target.name)).exists());
            assert!(!dir.path().join(format!("{}.png", target.name)).exists());
        }
    }
}
