//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A macropad configuration touching every feature: names, descriptions,
/// macro references, encoders and explicit plus implicit macro slots.
pub const SAMPLE_CONFIG: &str = r#"
device_id: 5633
name: Editing Pad
layers:
  - index: 0
    name: Base
    keys:
      - row: 0
        col: 0
        value: LCTL(KC_C)
        description: Copy
      - row: 0
        col: 1
        value: M0
        description: Quit (CTRL-Q ESC)
      - row: 1
        col: 0
        value: KC_A
    encoders:
      - encoder: 0
        cw: KC_VOLU
        ccw: KC_VOLD
        description: Volume
  - index: 1
    keys:
      - row: 3
        col: 3
        value: LSFT(KC_TAB)
        description: Back
macros:
  - description: CTRL-Q then ESC
    actions:
      - type: tap
        keycode: LCTL(KC_Q)
      - KC_ESC
  - id: 4
    actions:
      - type: down
        keycode: KC_LSFT
      - type: delay
        ms: 20
      - type: up
        keycode: KC_LSFT
"#;

/// Path to the macropad binary
pub fn macropad_bin() -> &'static str {
    env!("CARGO_BIN_EXE_macropad")
}

/// Writes `content` to `name` inside a new temp dir.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    (path, temp_dir)
}

/// Writes [`SAMPLE_CONFIG`] to a temp dir.
pub fn create_sample_config() -> (PathBuf, TempDir) {
    create_temp_file("pad.yaml", SAMPLE_CONFIG)
}

/// Runs the binary with an isolated settings file inside `settings_dir`.
pub fn run_isolated(args: &[&str], settings_dir: &Path) -> Output {
    let settings = settings_dir.join("settings.toml");
    Command::new(macropad_bin())
        .arg("--config")
        .arg(&settings)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Stdout of a finished command as a `String`.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command as a `String`.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
