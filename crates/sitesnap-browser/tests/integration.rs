//! Integration tests for sitesnap-browser
//!
//! These tests require Chrome/Chromium to be installed and are marked
//! #[ignore] by default. Run with: cargo test --package sitesnap-browser -- --ignored

use sitesnap_browser::{
    converge_content_height, establish, CaptureBrowser, SessionAvailability, SessionConfig,
    TokioSleeper,
};
use std::time::Duration;

/// A tall page served from a data: URL so no network is needed.
fn tall_page_url() -> String {
    let html = r#"<!DOCTYPE html>
<html>
<head><title>Tall Page</title></head>
<body style="margin:0">
  <div style="height:3000px;background:linear-gradient(#fff,#000)"></div>
</body>
</html>"#;

    format!("data:text/html;charset=utf-8,{}", urlencode(html))
}

/// Minimal percent-encoding, good enough for the embedded test page.
fn urlencode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[tokio::test]
#[ignore] // Requires Chrome to be installed
async fn establish_reports_an_available_session() {
    let availability = establish(SessionConfig::default(), None)
        .await
        .expect("no override given, so no configuration error is possible");

    match availability {
        SessionAvailability::Available(browser) => {
            browser.close().await.expect("failed to close browser");
        }
        SessionAvailability::MissingBrowser(err) | SessionAvailability::Unavailable(err) => {
            panic!("expected an available session, got: {err}");
        }
    }
}

#[tokio::test]
#[ignore]
async fn full_capture_roundtrip_writes_a_png() {
    let browser = CaptureBrowser::launch(SessionConfig::default())
        .await
        .expect("failed to launch browser");

    let page = browser.new_page().await.expect("failed to create page");

    page.navigate(&tall_page_url())
        .await
        .expect("failed to navigate");

    let height = converge_content_height(&page, &TokioSleeper, Duration::from_millis(200), 25)
        .await
        .expect("height should converge");
    assert!(height >= 3000, "expected the tall page height, got {height}");

    let clamped = u32::try_from(height).expect("height fits in u32");
    page.set_viewport(1920, clamped + 200)
        .await
        .expect("failed to resize viewport");

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("tall.png");
    page.save_screenshot(&path)
        .await
        .expect("failed to save screenshot");

    assert!(path.exists(), "screenshot file should exist");
    assert!(
        std::fs::metadata(&path).unwrap().len() > 0,
        "screenshot should not be empty"
    );

    browser.close().await.expect("failed to close browser");
}
