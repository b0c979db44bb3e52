//! Locating a Chromium-compatible executable.
//!
//! Resolution order: an explicit override path (which must exist; a
//! nonexistent override is a configuration error, not a fallback trigger),
//! then a fixed candidate list probed against `PATH` and a couple of
//! absolute locations, and finally an automatic download of a known-good
//! Chromium revision via chromiumoxide's fetcher.

use crate::error::{BrowserError, Result};
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Candidate executables probed when no override is given, in order.
const CANDIDATES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium-browser",
    "chromium",
    "/usr/bin/chromium-browser",
    "/usr/bin/google-chrome",
];

/// How a browser executable was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserSource {
    /// Taken from an explicit override (the `CHROME_BINARY` environment
    /// variable).
    Override,
    /// Found among the known candidate locations.
    Detected,
    /// Downloaded by the fetcher.
    Fetched,
}

/// A resolved browser executable together with its provenance.
#[derive(Debug, Clone)]
pub struct ResolvedBrowser {
    /// Path to the executable.
    pub path: PathBuf,
    /// Where the executable came from.
    pub source: BrowserSource,
}

/// Resolves a usable browser executable.
///
/// # Errors
///
/// Returns [`BrowserError::ConfiguredExecutableMissing`] when the override
/// names a path that does not exist, and [`BrowserError::FetchFailed`] (or
/// an I/O error) when nothing was found locally and the download fallback
/// failed too.
pub async fn resolve(override_path: Option<PathBuf>) -> Result<ResolvedBrowser> {
    if let Some(path) = override_path {
        if !path.exists() {
            return Err(BrowserError::ConfiguredExecutableMissing(path));
        }
        return Ok(ResolvedBrowser {
            path,
            source: BrowserSource::Override,
        });
    }

    if let Some(path) = detect_local() {
        return Ok(ResolvedBrowser {
            path,
            source: BrowserSource::Detected,
        });
    }

    let path = fetch_chromium().await?;
    Ok(ResolvedBrowser {
        path,
        source: BrowserSource::Fetched,
    })
}

/// Probes the fixed candidate list: absolute entries for existence, bare
/// names against every `PATH` directory.
fn detect_local() -> Option<PathBuf> {
    let path_dirs: Vec<PathBuf> = std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).collect())
        .unwrap_or_default();

    for candidate in CANDIDATES {
        let candidate_path = Path::new(candidate);
        if candidate_path.is_absolute() {
            if candidate_path.is_file() {
                debug!(path = %candidate_path.display(), "found browser executable");
                return Some(candidate_path.to_path_buf());
            }
        } else if let Some(found) = find_in_dirs(candidate, &path_dirs) {
            debug!(path = %found.display(), "found browser executable on PATH");
            return Some(found);
        }
    }

    None
}

/// Looks a bare executable name up in the given directories, first hit wins.
fn find_in_dirs(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

/// Downloads a known-good Chromium revision into a local cache directory
/// and returns the path of its executable.
async fn fetch_chromium() -> Result<PathBuf> {
    let cache_dir = std::env::temp_dir().join("sitesnap-chromium");
    tokio::fs::create_dir_all(&cache_dir).await?;

    info!(dir = %cache_dir.display(), "no local browser found, downloading Chromium");

    let fetcher = BrowserFetcher::new(
        BrowserFetcherOptions::builder()
            .with_path(&cache_dir)
            .build()
            .map_err(|e| BrowserError::FetchFailed(e.to_string()))?,
    );
    let revision = fetcher
        .fetch()
        .await
        .map_err(|e| BrowserError::FetchFailed(e.to_string()))?;

    info!(path = %revision.executable_path.display(), "Chromium download complete");
    Ok(revision.executable_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn nonexistent_override_is_a_configuration_error() {
        let result = resolve(Some(PathBuf::from("/nonexistent/path"))).await;

        assert!(matches!(
            result,
            Err(BrowserError::ConfiguredExecutableMissing(path)) if path == Path::new("/nonexistent/path")
        ));
    }

    #[tokio::test]
    async fn existing_override_is_returned_verbatim() {
        let file = tempfile::NamedTempFile::new().expect("failed to create temp file");

        let resolved = resolve(Some(file.path().to_path_buf()))
            .await
            .expect("override should resolve");

        assert_eq!(resolved.path, file.path());
        assert_eq!(resolved.source, BrowserSource::Override);
    }

    #[test]
    fn find_in_dirs_locates_a_file_by_name() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("fake-chrome"), b"#!/bin/sh\n").unwrap();

        let dirs = vec![dir.path().to_path_buf()];
        let found = find_in_dirs("fake-chrome", &dirs);

        assert_eq!(found, Some(dir.path().join("fake-chrome")));
    }

    #[test]
    fn find_in_dirs_returns_none_when_absent() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let dirs = vec![dir.path().to_path_buf()];

        assert_eq!(find_in_dirs("fake-chrome", &dirs), None);
    }
}
