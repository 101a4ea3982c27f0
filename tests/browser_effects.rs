//! Browser tests for the page runtime: typing, reveal, navigation.
//!
//! Run with: `cargo test --test browser_effects -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::thread::sleep;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_fixtures_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_simple-folio");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("fixtures/content").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run simple-folio");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_fixtures_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .unwrap_or(Value::Null)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn typing_text_grows() {
    let tab = load_index();
    let first = eval(&tab, "document.querySelector('.typing-text').textContent.length");
    sleep(Duration::from_millis(600));
    let later = eval(&tab, "document.querySelector('.typing-text').textContent.length");
    assert!(
        later.as_u64().unwrap() > first.as_u64().unwrap(),
        "typing did not advance: {first} -> {later}"
    );
}

#[test]
#[ignore]
fn reveal_is_one_way() {
    let tab = load_index();
    eval(&tab, "document.getElementById('career').scrollIntoView()");
    sleep(Duration::from_millis(500));
    let visible = eval(&tab, "document.querySelector('.timeline-item').classList.contains('visible')");
    assert_eq!(visible, Value::Bool(true));

    eval(&tab, "window.scrollTo(0, 0)");
    sleep(Duration::from_millis(300));
    let still = eval(&tab, "document.querySelector('.timeline-item').classList.contains('visible')");
    assert_eq!(still, Value::Bool(true));
}

#[test]
#[ignore]
fn skill_bar_fills_to_level() {
    let tab = load_index();
    eval(&tab, "document.getElementById('skills').scrollIntoView()");
    sleep(Duration::from_millis(800));
    let width = eval(&tab, "document.querySelector('.skill-progress').style.width");
    let level = eval(&tab, "document.querySelector('.skill-progress').dataset.level");
    assert_eq!(
        width.as_str().unwrap(),
        format!("{}%", level.as_str().unwrap())
    );
}

#[test]
#[ignore]
fn scroll_spy_marks_one_link() {
    let tab = load_index();
    eval(&tab, "window.scrollTo(0, document.getElementById('projects').offsetTop)");
    sleep(Duration::from_millis(300));
    let active = eval(
        &tab,
        "Array.from(document.querySelectorAll('.nav-link.active')).map(a => a.getAttribute('href'))",
    );
    assert_eq!(active, serde_json::json!(["#projects"]));
    let scrolled = eval(&tab, "document.querySelector('.navbar').classList.contains('scrolled')");
    assert_eq!(scrolled, Value::Bool(true));
}

#[test]
#[ignore]
fn menu_toggle_opens_and_link_closes() {
    let tab = load_index();
    eval(&tab, "document.querySelector('.menu-toggle').click()");
    let open = eval(&tab, "document.querySelector('.nav-links').classList.contains('active')");
    assert_eq!(open, Value::Bool(true));

    eval(&tab, "document.querySelector('.nav-link').click()");
    let closed = eval(&tab, "document.querySelector('.nav-links').classList.contains('active')");
    assert_eq!(closed, Value::Bool(false));
}

#[test]
#[ignore]
fn cursor_markers_created() {
    let tab = load_index();
    let count = eval(
        &tab,
        "document.querySelectorAll('.cursor-glow, .cursor-dot').length",
    );
    assert_eq!(count.as_u64(), Some(2));
}
