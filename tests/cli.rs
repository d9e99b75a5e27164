//! CLI integration tests.
//!
//! Each test runs the binary in a fresh temporary directory so that no stray
//! `tint.toml` is picked up.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

fn tint(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tint").expect("Failed to find tint binary");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// derive
// ============================================================================

#[test]
fn derive_default_table() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .arg("derive")
        .assert()
        .success()
        .stdout(predicate::str::contains("primary #4f46e5  theme dark  mood 50  mode bold"))
        .stdout(predicate::str::contains("bg       #0b1020"))
        .stdout(predicate::str::contains("Primary Button"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn derive_css() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["derive", "--format", "css"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(":root {\n  --bg: #0b1020;"))
        .stdout(predicate::str::contains("  --primary: #4f46e5;"));
}

#[test]
fn derive_json_with_override() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["derive", "--format", "json", "--set", "accent=#ff00aa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"accent\": \"#ff00aa\""));
}

#[test]
fn derive_white_primary_is_darkened() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["derive", "--primary", "#ffffff", "-f", "css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--primary: #afafaf;"));
}

#[test]
fn derive_from_query() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["derive", "--query", "?th=light&md=minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme light"))
        .stdout(predicate::str::contains("mode minimal"));
}

#[test]
fn unknown_override_token_fails() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["derive", "--set", "glow=#ffffff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown token name"));
}

#[test]
fn malformed_primary_falls_back() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["derive", "--primary", "not-a-color", "-f", "css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--primary: #4f46e5;"))
        .stderr(predicate::str::contains("malformed hex color"));
}

#[test]
fn primary_with_alpha_falls_back() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["derive", "--primary", "#0ea5e900", "-f", "css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--primary: #4f46e5;"))
        .stderr(predicate::str::contains("malformed hex color"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn local_config_is_discovered() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tint.toml"), "[style]\ntheme = \"light\"\n\n[overrides]\nring = \"#123456\"\n").unwrap();
    tint(&dir)
        .args(["derive", "-f", "css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bg: #f8fafc;"))
        .stdout(predicate::str::contains("--ring: #123456;"));
}

#[test]
fn flags_beat_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[style]\ntheme = \"light\"\n").unwrap();
    tint(&dir)
        .arg("--config")
        .arg(&path)
        .args(["derive", "--theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme dark"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["--config", "absent.toml", "derive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

// ============================================================================
// other commands
// ============================================================================

#[test]
fn contrast_black_on_white() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["contrast", "#000000", "#ffffff"])
        .assert()
        .success()
        .stdout("#000000 on #ffffff: 21.00 AA\n");
}

#[test]
fn contrast_rejects_bad_color() {
    let dir = TempDir::new().unwrap();
    tint(&dir).args(["contrast", "#000", "#ffffff"]).assert().failure();
}

#[test]
fn share_query_and_url() {
    let dir = TempDir::new().unwrap();
    tint(&dir)
        .args(["share", "--mood", "72", "--mode", "playful"])
        .assert()
        .success()
        .stdout("p=4f46e5&th=dark&m=72&md=playful&ha=complementary\n");

    tint(&dir)
        .args(["share", "--base", "https://example.test/tint"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://example.test/tint?p=4f46e5&"));
}

#[test]
fn random_with_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let first = tint(&dir).args(["random", "--seed", "9", "-f", "json"]).output().unwrap();
    let second = tint(&dir).args(["random", "--seed", "9", "-f", "json"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn accessible_repairs_text_override() {
    let dir = TempDir::new().unwrap();
    let output = tint(&dir).args(["accessible", "--set", "text=#1a2030"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout.lines().find(|l| l.starts_with("Text on Background")).unwrap();
    assert!(line.ends_with(" AA"), "{line}");
}

#[test]
fn export_writes_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tokens.json");
    tint(&dir)
        .args(["export", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("{\n  \"bg\": \"#0b1020\""));
}
