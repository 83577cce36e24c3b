//! End-to-end runs of the command line tool

mod common;

use std::process::Command;

use common::sample_keymap_file;

fn reaper_keymap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_reaper-keymap"))
}

#[test]
fn test_prints_summary_then_json() {
    let (_dir, path) = sample_keymap_file();
    let config_home = tempfile::tempdir().unwrap();

    let output = reaper_keymap()
        .arg(&path)
        .arg("--compact")
        .env("XDG_CONFIG_HOME", config_home.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Parsed 3 actions, 4 scripts, and 17 keys."));

    let value: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(value["keys"].as_array().unwrap().len(), 17);
}

#[cfg(not(target_os = "windows"))]
#[test]
fn test_broken_config_is_reported_on_stderr() {
    let (_dir, path) = sample_keymap_file();
    let config_home = tempfile::tempdir().unwrap();
    let app_dir = config_home.path().join("reaper-keymap");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("config.yaml"), "comment_mode: [broken\n").unwrap();

    let output = reaper_keymap()
        .arg(&path)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to parse config at"),
        "stderr was: {}",
        stderr
    );
    assert!(stderr.contains("using defaults"));
}

#[test]
fn test_invalid_number_fails_with_line() {
    let (_dir, path) = common::write_temp_file("kb.ini", b"KEY 0 65 40 0\nKEY 0 65 40 main\n");
    let config_home = tempfile::tempdir().unwrap();

    let output = reaper_keymap()
        .arg(&path)
        .env("XDG_CONFIG_HOME", config_home.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr was: {}", stderr);
}
