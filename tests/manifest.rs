use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use toolmanifest::prelude::*;

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("tools")
}

/// Copies the fixture tools into `<root>/tools` so artifacts can be written next to them.
fn setup_root() -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    let tools = root.path().join("tools");
    fs::create_dir(&tools).unwrap();

    for entry in fs::read_dir(fixture_dir()).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), tools.join(entry.file_name())).unwrap();
    }

    root
}

fn builder_for(root: &Path, policy: NamingPolicy) -> ManifestBuilder {
    ManifestBuilder::new(
        ManifestConfig {
            policy,
            ..ManifestConfig::default()
        }
        .resolve(root),
    )
}

fn names(manifest: &Manifest) -> Vec<&str> {
    manifest.entries().iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_title_policy_fixture() {
    // Arrange
    let root = setup_root();
    let builder = builder_for(root.path(), NamingPolicy::TitleTagWithFallback);

    // Act
    let report = builder.build().unwrap();

    // Assert
    assert_eq!(
        names(&report.manifest),
        vec![
            "100% Done",
            "Demo Tool",
            "JSON Formatter",
            "My Cool Tool",
            "Zebra Crossing",
        ]
    );
    assert!(report.warnings.is_empty());
}

#[test]
fn test_filename_policy_fixture() {
    let root = setup_root();
    let builder = builder_for(root.path(), NamingPolicy::Filename);

    let report = builder.build().unwrap();

    assert_eq!(
        names(&report.manifest),
        vec![
            "100% Done",
            "Demo",
            "Json Formatter",
            "My Cool Tool",
            "Zebra Crossing",
        ]
    );
}

#[test]
fn test_generated_json_round_trip() {
    // Arrange
    let root = setup_root();
    let builder = builder_for(root.path(), NamingPolicy::TitleTagWithFallback);

    // Act
    let report = builder.generate().unwrap();

    // Assert
    let json = fs::read_to_string(root.path().join("tool-manifest.json")).unwrap();
    let parsed: Vec<ManifestEntry> = serde_json::from_str(&json).unwrap();
    let files: Vec<&str> = parsed.iter().map(|e| e.file.as_str()).collect();

    assert_eq!(parsed.len(), report.manifest.len());
    assert_eq!(
        files,
        vec![
            "tools/100%_done.html",
            "tools/demo.html",
            "tools/json%20formatter.html",
            "tools/my_cool-tool.html",
            "tools/Zebra-Crossing.HTML",
        ]
    );
    assert!(parsed.contains(&ManifestEntry {
        name: "Demo Tool".to_string(),
        file: "tools/demo.html".to_string(),
    }));
}

#[test]
fn test_script_matches_json() {
    let root = setup_root();
    builder_for(root.path(), NamingPolicy::TitleTagWithFallback)
        .generate()
        .unwrap();

    let json = fs::read_to_string(root.path().join("tool-manifest.json")).unwrap();
    let script = fs::read_to_string(root.path().join("tool-manifest.js")).unwrap();

    assert_eq!(script, format!("window.toolManifest = {};\n", json));
}

#[test]
fn test_generate_is_idempotent() {
    // Arrange
    let root = setup_root();
    let builder = builder_for(root.path(), NamingPolicy::TitleTagWithFallback);

    // Act
    builder.generate().unwrap();
    let first_json = fs::read(root.path().join("tool-manifest.json")).unwrap();
    let first_script = fs::read(root.path().join("tool-manifest.js")).unwrap();
    builder.generate().unwrap();

    // Assert
    assert_eq!(fs::read(root.path().join("tool-manifest.json")).unwrap(), first_json);
    assert_eq!(fs::read(root.path().join("tool-manifest.js")).unwrap(), first_script);
}

#[test]
fn test_manifest_follows_collation_order() {
    // Arrange
    let root = tempfile::tempdir().unwrap();
    let tools = root.path().join("tools");
    fs::create_dir(&tools).unwrap();
    for name in ["my.html", "my-tool.html", "éclair.html", "my_tool.html", "fig.html"] {
        fs::write(tools.join(name), "").unwrap();
    }

    // Act
    let report = builder_for(root.path(), NamingPolicy::Filename)
        .build()
        .unwrap();

    // Assert
    let files: Vec<&str> = report
        .manifest
        .entries()
        .iter()
        .map(|e| e.file.as_str())
        .collect();
    assert_eq!(
        files,
        vec![
            "tools/éclair.html",
            "tools/fig.html",
            "tools/my_tool.html",
            "tools/my-tool.html",
            "tools/my.html",
        ]
    );
}

#[test]
fn test_only_non_html_files_gives_empty_manifest() {
    let root = tempfile::tempdir().unwrap();
    let tools = root.path().join("tools");
    fs::create_dir(&tools).unwrap();
    fs::write(tools.join("readme.md"), "# Tools").unwrap();
    fs::write(tools.join("old.htm"), "<title>Old</title>").unwrap();

    let report = builder_for(root.path(), NamingPolicy::TitleTagWithFallback)
        .generate()
        .unwrap();

    assert!(report.manifest.is_empty());
    assert_eq!(
        fs::read_to_string(root.path().join("tool-manifest.json")).unwrap(),
        "[]"
    );
    assert_eq!(
        fs::read_to_string(root.path().join("tool-manifest.js")).unwrap(),
        "window.toolManifest = [];\n"
    );
}

#[test]
fn test_cli_missing_source_exits_non_zero() {
    // Arrange
    let root = tempfile::tempdir().unwrap();

    // Act
    let status = Command::new(env!("CARGO_BIN_EXE_toolmanifest"))
        .arg("--root")
        .arg(root.path())
        .env_remove("TOOLMANIFEST_CONFIG")
        .env_remove("TOOLMANIFEST_POLICY")
        .status()
        .unwrap();

    // Assert
    assert_eq!(status.code(), Some(1));
    assert!(!root.path().join("tool-manifest.json").exists());
    assert!(!root.path().join("tool-manifest.js").exists());
}

#[test]
fn test_cli_generate_then_check() {
    let root = setup_root();
    let run = |args: &[&str]| {
        Command::new(env!("CARGO_BIN_EXE_toolmanifest"))
            .arg("--root")
            .arg(root.path())
            .args(args)
            .env_remove("TOOLMANIFEST_CONFIG")
            .env_remove("TOOLMANIFEST_POLICY")
            .output()
            .unwrap()
    };

    let stale = run(&["check"]);
    assert_eq!(stale.status.code(), Some(65));

    let generate = run(&["generate"]);
    assert_eq!(generate.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&generate.stdout);
    assert!(stdout.contains("Wrote 5 entries"));

    let current = run(&["check"]);
    assert_eq!(current.status.code(), Some(0));
}

#[test]
fn test_cli_preview_prints_plain_json_when_piped() {
    let root = setup_root();

    let output = Command::new(env!("CARGO_BIN_EXE_toolmanifest"))
        .arg("--root")
        .arg(root.path())
        .args(["--policy", "filename", "preview"])
        .env_remove("TOOLMANIFEST_CONFIG")
        .env_remove("TOOLMANIFEST_POLICY")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let parsed: Vec<ManifestEntry> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.len(), 5);
    assert_eq!(parsed[1].name, "Demo");
    assert!(!root.path().join("tool-manifest.json").exists());
}
