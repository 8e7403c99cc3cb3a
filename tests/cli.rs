//! End-to-end tests for the `assetsleuth` binary.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_bytes(path: &Path, n: usize) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, vec![0u8; n]).unwrap();
}

fn assetsleuth(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("assetsleuth").unwrap();
    cmd.current_dir(workdir);
    for var in [
        "ASSETSLEUTH_ROOT",
        "ASSETSLEUTH_OUTPUT_DIR",
        "ASSETSLEUTH_REPORT_NAME",
        "ASSETSLEUTH_LISTING_NAME",
        "ASSETSLEUTH_ARCHIVE",
        "ASSETSLEUTH_SIDECAR_SUFFIX",
        "ASSETSLEUTH_HIDDEN_PREFIX",
        "ASSETSLEUTH_NO_CREATE_ROOT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn run_produces_report_charts_and_archive() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("Assets/a.prefab"), 100);
    write_bytes(&tmp.path().join("Assets/b.png"), 300);
    write_bytes(&tmp.path().join("Assets/c.meta"), 50);

    assetsleuth(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ASSET ANALYSIS SUMMARY"))
        .stdout(predicate::str::contains("TEXTURES"));

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(tmp.path().join("metrics/assets_report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report["total_size_bytes"], 400);
    assert_eq!(report["metrics"]["prefabs"]["percentage"], 25.0);
    assert_eq!(report["metrics"]["textures"]["percentage"], 75.0);

    for chart in [
        "01_distribution_pie_chart.png",
        "02_types_comparison_bar_chart.png",
        "03_top_assets_bar_chart.png",
    ] {
        assert!(tmp.path().join("metrics").join(chart).is_file(), "{chart} missing");
    }
    assert!(tmp.path().join("metrics/assets_listing.csv").is_file());
    assert!(tmp.path().join("metrics_report.zip").is_file());
}

#[test]
fn missing_root_is_bootstrapped() {
    let tmp = TempDir::new().unwrap();

    assetsleuth(tmp.path())
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files: 0"));

    assert!(tmp.path().join("Assets").is_dir());
    assert!(tmp.path().join("metrics/assets_report.json").is_file());
}

#[test]
fn charts_without_report_is_skipped() {
    let tmp = TempDir::new().unwrap();

    assetsleuth(tmp.path())
        .arg("charts")
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping charts"));
    assert!(!tmp.path().join("metrics").exists());
}

#[test]
fn custom_paths_are_honoured() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("game/Audio/theme.ogg"), 2048);

    assetsleuth(tmp.path())
        .args(["analyze", "--root", "game", "--output-dir", "out"])
        .assert()
        .success();

    let text = fs::read_to_string(tmp.path().join("out/assets_report.json")).unwrap();
    assert!(text.contains("\"Audio/theme.ogg\""));
}

#[test]
fn unreadable_root_fails() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("Assets"), 10);

    assetsleuth(tmp.path())
        .arg("analyze")
        .assert()
        .failure();
    assert!(!tmp.path().join("metrics/assets_report.json").exists());
}

#[test]
fn settings_fall_back_to_environment() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("Assets/hero.fbx"), 512);
    write_bytes(&tmp.path().join("Assets/hero.fbx.import"), 16);

    assetsleuth(tmp.path())
        .arg("analyze")
        .env("ASSETSLEUTH_REPORT_NAME", "inventory.json")
        .env("ASSETSLEUTH_LISTING_NAME", "inventory.csv")
        .env("ASSETSLEUTH_SIDECAR_SUFFIX", ".import")
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(tmp.path().join("metrics/inventory.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report["total_size_bytes"], 512);
    assert!(tmp.path().join("metrics/inventory.csv").is_file());
    assert!(!tmp.path().join("metrics/assets_report.json").exists());
}

#[test]
fn no_create_root_from_environment() {
    let tmp = TempDir::new().unwrap();

    assetsleuth(tmp.path())
        .arg("analyze")
        .env("ASSETSLEUTH_NO_CREATE_ROOT", "true")
        .assert()
        .success();
    assert!(!tmp.path().join("Assets").exists());
}

/// Scanning the working directory itself: `.` must not be pruned as hidden.
#[test]
fn current_directory_root_is_scanned() {
    let tmp = TempDir::new().unwrap();
    let game = tmp.path().join("game");
    write_bytes(&game.join("Audio/theme.ogg"), 2048);
    write_bytes(&game.join("b.png"), 300);

    assetsleuth(&game)
        .args(["analyze", "--root", ".", "--output-dir", "../out"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(tmp.path().join("out/assets_report.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(report["total_size_bytes"], 2348);
    assert_eq!(report["metrics"]["audio"]["count"], 1);
}
