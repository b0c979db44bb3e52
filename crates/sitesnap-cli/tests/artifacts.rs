//! Artifact-set invariants over the full built-in target table.
//!
//! After any run, every configured target must own exactly one artifact
//! set: a screenshot, or a placeholder image plus reason note. These tests
//! cover the degraded (placeholder-only) run, which needs no browser.

use sitesnap_cli::capture::write_placeholders_for_all;
use sitesnap_cli::targets::TARGETS;

#[test]
fn placeholder_only_run_covers_every_target() {
    let dir = tempfile::tempdir().unwrap();

    let summary = write_placeholders_for_all(TARGETS, dir.path(), "no browser available")
        .expect("placeholder run should complete");

    assert_eq!(summary.placeholders, TARGETS.len());
    assert_eq!(summary.captured, 0);

    for target in TARGETS {
        let svg = dir.path().join(format!("{}.svg", target.name));
        let txt = dir.path().join(format!("{}.txt", target.name));
        let png = dir.path().join(format!("{}.png", target.name));

        assert!(svg.exists(), "missing placeholder image for {}", target.name);
        assert!(txt.exists(), "missing reason note for {}", target.name);
        assert!(!png.exists(), "unexpected screenshot for {}", target.name);
    }
}

#[test]
fn placeholder_only_run_is_idempotent_and_destructive() {
    let dir = tempfile::tempdir().unwrap();

    // A stale screenshot from an earlier, healthier run.
    std::fs::write(dir.path().join("ryval.png"), b"stale").unwrap();

    write_placeholders_for_all(TARGETS, dir.path(), "driver unavailable")
        .expect("first placeholder run should complete");
    write_placeholders_for_all(TARGETS, dir.path(), "driver unavailable")
        .expect("second placeholder run should complete");

    assert!(!dir.path().join("ryval.png").exists());

    // Two files per target, nothing else.
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, TARGETS.len() * 2);
}
