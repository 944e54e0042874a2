//! CLI integration tests for Poet
//!
//! These tests run the binary end to end: generation, rendering stored
//! blueprints, validation and single-class chains.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance for the poet binary, isolated from user config
fn poet_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("poet"));
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("HOME", dir)
        .env_remove("POET_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Two android modules (the first launches the app) and one java module
/// that wrongly depends on the app module
const ERROR_BLUEPRINT: &str = r#"{
  "name": "Broken",
  "android_modules": [
    { "index": 0, "launch": true, "dependencies": ["androidAppModule1"] },
    { "index": 1 }
  ],
  "java_modules": [
    { "index": 0, "dependencies": ["androidAppModule0"] }
  ]
}"#;

fn write_blueprint(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("blueprint.json");
    fs::write(&path, content).unwrap();
    path
}

fn rgb(img: &image::RgbImage, x: u32, y: u32) -> [u8; 3] {
    img.get_pixel(x, y).0
}

// =============================================================================
// Generate Tests
// =============================================================================

#[test]
fn test_generate_writes_project() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args([
            "generate", "--output", "out", "--android", "2", "--java", "4", "--classes", "2",
            "--methods", "3", "--deps", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 6 modules (12 classes, 12 tests)"))
        .stdout(predicate::str::contains("Dependency matrix image saved at"));

    let root = dir.path().join("out");
    let app_class = root.join("androidAppModule0/src/main/java/com/poet/androidappmodule0/Foo0.kt");
    let java_test = root.join("module3/src/test/java/com/poet/module3/Foo1Test.kt");
    assert!(app_class.is_file());
    assert!(java_test.is_file());
    assert!(root.join("blueprint.json").is_file());
    assert!(!root.join("blueprint.json.tmp").exists());

    let config = fs::read_to_string(root.join("poet.toml")).unwrap();
    assert!(config.contains("methods_per_class = 3"));

    // The last class of a module enters the chain at its far end
    let source = fs::read_to_string(root.join("module0/src/main/java/com/poet/module0/Foo1.kt")).unwrap();
    assert!(source.contains("Foo0().foo2()"));

    let img = image::open(root.join("dependencies.png")).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (30, 30));
}

#[test]
fn test_generate_java_without_image() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args([
            "generate", "--output", "out", "--android", "1", "--java", "1", "--classes", "1",
            "--methods", "2", "--language", "java", "--no-image",
        ])
        .assert()
        .success();

    let root = dir.path().join("out");
    let class = fs::read_to_string(root.join("module0/src/main/java/com/poet/module0/Foo0.java")).unwrap();
    assert!(class.starts_with("package com.poet.module0;"));
    assert!(class.contains("public void foo1() {"));
    assert!(!root.join("dependencies.png").exists());
}

#[test]
fn test_generate_json_output() {
    let dir = TempDir::new().unwrap();

    let out = poet_cmd(dir.path())
        .args(["--format", "json", "generate", "--output", "out", "--android", "1", "--java", "2"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["modules"], 3);
    assert_eq!(json["language"], "kotlin");
    assert!(json["image"].as_str().unwrap().ends_with("dependencies.png"));
}

#[test]
fn test_generate_reads_project_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("poet.toml"),
        "[project]\nname = \"Configured\"\npackage_prefix = \"org.bench\"\n\n[shape]\nandroid_modules = 1\njava_modules = 1\nclasses_per_module = 1\n",
    )
    .unwrap();

    poet_cmd(dir.path()).args(["generate", "--no-image"]).assert().success();

    assert!(dir
        .path()
        .join("Configured/module0/src/main/java/org/bench/module0/Foo0.kt")
        .is_file());
}

#[test]
fn test_generate_rejects_zero_methods() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args(["generate", "--output", "out", "--methods", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_generate_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args(["generate", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

// =============================================================================
// Render Tests
// =============================================================================

#[test]
fn test_render_marks_error_edge() {
    let dir = TempDir::new().unwrap();
    let blueprint = write_blueprint(&dir, ERROR_BLUEPRINT);

    poet_cmd(dir.path())
        .arg("render")
        .arg(&blueprint)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency matrix image saved at"))
        .stderr(predicate::str::contains("marked red"));

    let img = image::open(dir.path().join("dependencies.png")).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (18, 18));

    // Header swatches: app, android library, java library
    assert_eq!(rgb(&img, 1, 6), [0x50, 0x50, 0xFF]);
    assert_eq!(rgb(&img, 1, 10), [0xA4, 0xC6, 0x39]);
    assert_eq!(rgb(&img, 14, 1), [0xF7, 0xDB, 0x64]);

    // Row 0 column 1 is a valid edge, row 2 column 0 the error edge
    assert_eq!(rgb(&img, 10, 6), [0x00, 0xAF, 0x00]);
    assert_eq!(rgb(&img, 6, 14), [0xAF, 0x00, 0x00]);

    // Grid line and untouched slot
    assert_eq!(rgb(&img, 5, 8), [0xAF, 0xAF, 0xAF]);
    assert_eq!(rgb(&img, 14, 14), [0xFF, 0xFF, 0xFF]);
}

#[test]
fn test_render_custom_output_path() {
    let dir = TempDir::new().unwrap();
    let blueprint = write_blueprint(&dir, ERROR_BLUEPRINT);

    poet_cmd(dir.path())
        .arg("render")
        .arg(&blueprint)
        .args(["--output", "images/matrix.png"])
        .assert()
        .success();

    assert!(dir.path().join("images/matrix.png").is_file());
    assert!(!dir.path().join("dependencies.png").exists());
}

#[test]
fn test_render_malformed_key_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let blueprint = write_blueprint(
        &dir,
        r#"{"name": "Bad", "android_modules": [{"index": 0, "launch": true}],
            "java_modules": [{"index": 0, "dependencies": ["widget3"]}]}"#,
    );

    poet_cmd(dir.path())
        .arg("render")
        .arg(&blueprint)
        .assert()
        .failure()
        .stderr(predicate::str::contains("widget3"))
        .stderr(predicate::str::contains("module0"));

    assert!(!dir.path().join("dependencies.png").exists());
}

#[test]
fn test_render_dangling_dependency_fails() {
    let dir = TempDir::new().unwrap();
    let blueprint = write_blueprint(
        &dir,
        r#"{"name": "Dangling", "android_modules": [{"index": 0, "launch": true, "dependencies": ["module7"]}]}"#,
    );

    poet_cmd(dir.path())
        .arg("render")
        .arg(&blueprint)
        .assert()
        .failure()
        .stderr(predicate::str::contains("module7"));

    assert!(!dir.path().join("dependencies.png").exists());
}

#[test]
fn test_render_missing_blueprint_fails() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args(["render", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open blueprint"));
}

// =============================================================================
// Validate Tests
// =============================================================================

#[test]
fn test_validate_reports_error_edges() {
    let dir = TempDir::new().unwrap();
    let blueprint = write_blueprint(&dir, ERROR_BLUEPRINT);

    poet_cmd(dir.path())
        .arg("validate")
        .arg(&blueprint)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid dependencies (1)"))
        .stdout(predicate::str::contains("androidAppModule0"))
        .stderr(predicate::str::contains("1 invalid dependencies"));
}

#[test]
fn test_validate_generated_project_is_valid() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args(["generate", "--output", "out", "--no-image"])
        .assert()
        .success();

    poet_cmd(dir.path())
        .args(["validate", "out/blueprint.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blueprint is valid: 6 modules"));
}

#[test]
fn test_validate_json_lists_edges() {
    let dir = TempDir::new().unwrap();
    let blueprint = write_blueprint(&dir, ERROR_BLUEPRINT);

    let out = poet_cmd(dir.path())
        .args(["--format", "json", "validate"])
        .arg(&blueprint)
        .output()
        .unwrap();
    assert!(!out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["error_edges"][0]["module"], "module0");
    assert_eq!(json["error_edges"][0]["dependency"], "androidAppModule0");
}

// =============================================================================
// Chain Tests
// =============================================================================

#[test]
fn test_chain_without_seed_calls() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args(["chain", "--methods", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("    fun foo0() {\n    }\n"))
        .stdout(predicate::str::contains("    fun foo1() {\n        foo0()\n    }\n"))
        .stdout(predicate::str::contains("    fun foo2() {\n        foo1()\n    }\n"))
        .stdout(predicate::str::contains("entry point: com.poet.Foo0.foo2"));
}

#[test]
fn test_chain_with_seed_call() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args(["chain", "--methods", "1", "--call", "Bar.baz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("        Bar().baz()\n"))
        .stdout(predicate::str::contains("entry point: com.poet.Foo0.foo0"));
}

#[test]
fn test_chain_json() {
    let dir = TempDir::new().unwrap();

    let out = poet_cmd(dir.path())
        .args(["--format", "json", "chain", "--methods", "2", "--language", "java", "--class", "4"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["class"], "com.poet.Foo4");
    assert_eq!(json["class_path"], "module0/src/main/java/com/poet/Foo4.java");
    assert_eq!(json["test_path"], "module0/src/test/java/com/poet/Foo4Test.java");
    assert_eq!(json["entry_point"]["method_name"], "foo1");
    assert_eq!(json["methods"][1]["statements"][0], "    foo0();\n");
}

#[test]
fn test_chain_empty_has_no_entry_point() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args(["chain", "--methods", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entry point").not());
}

#[test]
fn test_chain_rejects_bad_call() {
    let dir = TempDir::new().unwrap();

    poet_cmd(dir.path())
        .args(["chain", "--call", "nodot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected Class.method"));
}
