//! End-to-end tests running the `simple-folio` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simple-folio"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run simple-folio")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn path(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn build_writes_site() {
    let out = TempDir::new().unwrap();
    let output = run(&["build", "--source", path(&fixtures()), "--output", path(out.path())]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert!(text.contains("Pages (single-page)"));
    assert!(text.contains("001 index.html"));
    assert!(text.contains("==> Build complete"));

    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("Alex Morgan"));
    assert!(html.contains("--color-accent: #22d3ee"));
    assert!(out.path().join("assets/favicon.svg").exists());
}

#[test]
fn build_without_content_uses_stock_record() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let output = run(&["build", "--source", path(src.path()), "--output", path(out.path())]);
    assert!(output.status.success());
    let html = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("Alex Morgan"));
}

#[test]
fn build_fails_on_invalid_config() {
    let src = TempDir::new().unwrap();
    std::fs::write(src.path().join("config.toml"), "[colors]\naccent = \"teal\"\n").unwrap();
    let out = TempDir::new().unwrap();
    let output = run(&["build", "--source", path(src.path()), "--output", path(out.path())]);
    assert!(!output.status.success());
    assert!(!out.path().join("index.html").exists());
}

#[test]
fn check_prints_inventory() {
    let output = run(&["check", "--source", path(&fixtures())]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Profile"));
    assert!(text.contains("    Source: content.toml"));
    assert!(text.contains("Career"));
    assert!(text.contains("==> Content is valid"));
}

#[test]
fn gen_config_round_trips() {
    let output = run(&["gen-config"]);
    assert!(output.status.success());
    let src = TempDir::new().unwrap();
    std::fs::write(src.path().join("config.toml"), &output.stdout).unwrap();

    let out = TempDir::new().unwrap();
    let built = run(&["build", "--source", path(src.path()), "--output", path(out.path())]);
    assert!(built.status.success(), "{}", String::from_utf8_lossy(&built.stderr));
}

#[test]
fn gen_content_is_loadable() {
    let output = run(&["gen-content"]);
    assert!(output.status.success());
    let src = TempDir::new().unwrap();
    std::fs::write(src.path().join("content.toml"), &output.stdout).unwrap();

    let checked = run(&["check", "--source", path(src.path())]);
    assert!(checked.status.success());
    assert!(stdout(&checked).contains("Source: content.toml"));
}

#[test]
fn typing_preview_timeline() {
    let src = TempDir::new().unwrap();
    std::fs::write(
        src.path().join("content.toml"),
        "[profile]\nname = \"T\"\ngreeting = \"Hi\"\nroles = [\"A\", \"BB\"]\nbio = \"\"\nphoto = \"p.jpg\"\nemail = \"t@example.com\"\n\n[contact]\nemail = \"t@example.com\"\n",
    )
    .unwrap();
    let output = run(&["typing", "--source", path(src.path()), "--seconds", "6"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "      0 ms  \"A\"",
            "   2000 ms  \"\"",
            "   2500 ms  \"B\"",
            "   2600 ms  \"BB\"",
            "   4600 ms  \"B\"",
            "   4650 ms  \"\"",
            "   5150 ms  \"A\"",
        ]
    );
}

#[test]
fn typing_rejects_out_of_range_seconds() {
    for seconds in ["0", "3601", "18446744073709551615"] {
        let output = run(&["typing", "--seconds", seconds]);
        assert!(!output.status.success(), "--seconds {seconds} was accepted");
        assert!(String::from_utf8_lossy(&output.stderr).contains("--seconds"));
    }
}
