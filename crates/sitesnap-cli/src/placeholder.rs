//! Placeholder artifacts for failed captures.
//!
//! When a target cannot be captured it still gets an output: a small SVG
//! card carrying the title-cased target name and the failure reason, plus a
//! plain-text note restating the reason. Any stale screenshot from an
//! earlier run is deleted first, so a target never has both a real and a
//! placeholder artifact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Longest failure reason embedded in the SVG; the full text always goes
/// into the note file.
const MAX_SVG_REASON_CHARS: usize = 120;

/// Paths of a written placeholder pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderArtifact {
    /// The generated SVG image.
    pub image: PathBuf,
    /// The plain-text reason note.
    pub note: PathBuf,
}

/// Writes the placeholder pair for `name` into `out_dir`.
///
/// Destructive and idempotent: a pre-existing `<name>.png` is removed, and
/// running twice leaves the same single `.svg`/`.txt` pair.
///
/// # Errors
///
/// Returns an error if the stale screenshot cannot be removed (other than
/// it not existing) or either file cannot be written.
pub fn write_placeholder(out_dir: &Path, name: &str, reason: &str) -> io::Result<PlaceholderArtifact> {
    let screenshot = out_dir.join(format!("{name}.png"));
    match fs::remove_file(&screenshot) {
        Ok(()) => debug!(path = %screenshot.display(), "removed stale screenshot"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    let image = out_dir.join(format!("{name}.svg"));
    fs::write(&image, render_svg(name, reason))?;

    let note = out_dir.join(format!("{name}.txt"));
    fs::write(&note, format!("Screenshot capture for {name} failed: {reason}\n"))?;

    Ok(PlaceholderArtifact { image, note })
}

/// Renders the placeholder card.
fn render_svg(name: &str, reason: &str) -> String {
    let title = html_escape::encode_text(&title_case(name)).into_owned();
    let detail = html_escape::encode_text(&clip(reason, MAX_SVG_REASON_CHARS)).into_owned();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="630" viewBox="0 0 1200 630">
  <rect width="1200" height="630" fill="#20242d"/>
  <text x="60" y="300" font-family="sans-serif" font-size="64" fill="#f5f6f8">{title}</text>
  <text x="60" y="380" font-family="sans-serif" font-size="26" fill="#98a1b3">capture failed: {detail}</text>
</svg>
"##
    )
}

/// Uppercases the first character of every whitespace-separated word.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Truncates to `max_chars` characters, appending an ellipsis when clipped.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(max_chars).collect();
        clipped.push('…');
        clipped
    }
}
