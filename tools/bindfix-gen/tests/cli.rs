// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

// Run the built binary: snapshot with `contract`, then `check` against it.

use std::path::Path;
use std::process::{Command, Output};

fn bindfix_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bindfix-gen"))
        .args(args)
        .env_remove("BINDFIX_GEN_CONFIG")
        .output()
        .expect("spawn bindfix-gen")
}

fn write_snapshot(path: &Path) {
    let out = bindfix_gen(&["contract", "-o", path.to_str().expect("utf-8 path")]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn test_check_passes_on_fresh_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = dir.path().join("contract.json");
    write_snapshot(&snapshot);

    let out = bindfix_gen(&["check", snapshot.to_str().expect("utf-8 path")]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_check_reports_changed_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = dir.path().join("contract.json");
    write_snapshot(&snapshot);

    let text = std::fs::read_to_string(&snapshot).expect("read snapshot");
    let mut json: serde_json::Value = serde_json::from_str(&text).expect("parse snapshot");
    let config = json["types"]
        .as_array_mut()
        .expect("types array")
        .iter_mut()
        .find(|ty| ty["name"] == "Config")
        .expect("Config entry");
    config["defaults"]["id"] = serde_json::json!(7);
    std::fs::write(&snapshot, serde_json::to_string_pretty(&json).expect("serialize"))
        .expect("write snapshot");

    let out = bindfix_gen(&["check", snapshot.to_str().expect("utf-8 path")]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "{stdout}");
    assert!(lines[0].starts_with("Config: defaults changed, expected "), "{stdout}");
    assert!(lines[0].contains("\"id\":7"), "{stdout}");
    assert!(lines[0].contains("\"id\":42"), "{stdout}");
}

#[test]
fn test_check_missing_snapshot_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.json");

    let out = bindfix_gen(&["check", missing.to_str().expect("utf-8 path")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("[ERROR] reading"));
}
