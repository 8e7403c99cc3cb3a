//! End-to-end scan tests.
//!
//! These exercise the real walker → aggregator → report builder path
//! against temporary directory trees, with no mocking of the filesystem.
use assetsleuth_core::model::Category;
use assetsleuth_core::report::{
    build_report, build_report_at, load_report, write_report, Report, LEADERBOARD_LEN,
};
use assetsleuth_core::scanner::{scan, WalkRules};
use assetsleuth_core::AssetError;
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// A small Unity-like asset tree:
///
/// ```text
/// root/
///   Prefabs/Player.prefab       (1 000)
///   Prefabs/Player.prefab.meta  (  50, sidecar)
///   Scenes/Main.unity           (4 000)
///   Art/Textures/Grass.PNG      (3 000)
///   Art/Textures/sky.jpg        (2 000)
///   Art/Models/tree.fbx         (5 000)
///   Audio/theme.ogg             (6 000)
///   Scripts/Player.cs           (  300)
///   Docs/notes.xyz              (  200)
///   LICENSE                     (  100)
///   .git/objects/pack.png       (9 999, hidden dir)
/// ```
fn build_asset_tree(root: &Path) {
    write_bytes(&root.join("Prefabs/Player.prefab"), 1_000);
    write_bytes(&root.join("Prefabs/Player.prefab.meta"), 50);
    write_bytes(&root.join("Scenes/Main.unity"), 4_000);
    write_bytes(&root.join("Art/Textures/Grass.PNG"), 3_000);
    write_bytes(&root.join("Art/Textures/sky.jpg"), 2_000);
    write_bytes(&root.join("Art/Models/tree.fbx"), 5_000);
    write_bytes(&root.join("Audio/theme.ogg"), 6_000);
    write_bytes(&root.join("Scripts/Player.cs"), 300);
    write_bytes(&root.join("Docs/notes.xyz"), 200);
    write_bytes(&root.join("LICENSE"), 100);
    write_bytes(&root.join(".git/objects/pack.png"), 9_999);
}

fn scan_report(root: &Path) -> Report {
    build_report(scan(root, WalkRules::default()).expect("scan failed"))
}

fn all_paths(report: &Report) -> Vec<String> {
    report
        .categories
        .iter()
        .flat_map(|c| c.all_files.iter().map(|e| e.path.clone()))
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn scenario_prefab_texture_and_sidecar() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("a.prefab"), 100);
    write_bytes(&tmp.path().join("b.png"), 300);
    write_bytes(&tmp.path().join("c.meta"), 50);

    let report = scan_report(tmp.path());

    assert_eq!(report.total_size_bytes, 400);
    let prefabs = report.category(Category::Prefabs).unwrap();
    assert_eq!((prefabs.count, prefabs.total_size_bytes), (1, 100));
    assert_eq!(prefabs.percentage, 25.0);
    let textures = report.category(Category::Textures).unwrap();
    assert_eq!((textures.count, textures.total_size_bytes), (1, 300));
    assert_eq!(textures.percentage, 75.0);
    assert!(report.category(Category::Other).is_none());
    assert!(!all_paths(&report).iter().any(|p| p.contains("c.meta")));
}

#[test]
fn classifies_whole_tree() {
    let tmp = TempDir::new().unwrap();
    build_asset_tree(tmp.path());
    let report = scan_report(tmp.path());

    let count = |c| report.category(c).map_or(0, |s| s.count);
    assert_eq!(count(Category::Prefabs), 1);
    assert_eq!(count(Category::Scenes), 1);
    assert_eq!(count(Category::Textures), 2);
    assert_eq!(count(Category::Meshes), 1);
    assert_eq!(count(Category::Audio), 1);
    assert_eq!(count(Category::Scripts), 1);
    assert_eq!(count(Category::Other), 2);
    assert_eq!(count(Category::Materials), 0);

    // Hidden directory and sidecar contribute nothing.
    assert_eq!(report.total_size_bytes, 21_600);
    assert!(!all_paths(&report).iter().any(|p| p.starts_with(".git")));

    let sum: u64 = report.categories.iter().map(|c| c.total_size_bytes).sum();
    assert_eq!(sum, report.total_size_bytes);
}

#[test]
fn relative_paths_are_forward_slashed() {
    let tmp = TempDir::new().unwrap();
    build_asset_tree(tmp.path());
    let report = scan_report(tmp.path());

    let textures = report.category(Category::Textures).unwrap();
    let paths: Vec<_> = textures.all_files.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["Art/Textures/Grass.PNG", "Art/Textures/sky.jpg"]);
    assert_eq!(textures.all_files[0].name, "Grass.PNG");
}

#[test]
fn categories_are_exactly_the_non_empty_ones() {
    let tmp = TempDir::new().unwrap();
    build_asset_tree(tmp.path());
    let report = scan_report(tmp.path());

    assert!(report.categories.iter().all(|c| c.count > 0));
    assert!(report
        .categories
        .windows(2)
        .all(|w| w[0].total_size_bytes >= w[1].total_size_bytes));
    let pct: f64 = report.categories.iter().map(|c| c.percentage).sum();
    assert!((pct - 100.0).abs() <= 0.1, "percentages sum to {pct}");
}

#[test]
fn leaderboards_are_bounded_and_sorted() {
    let tmp = TempDir::new().unwrap();
    for i in 0..14 {
        write_bytes(&tmp.path().join(format!("Audio/clip{i:02}.wav")), 100 + (i * 7) % 5 * 10);
    }
    for i in 0..3 {
        write_bytes(&tmp.path().join(format!("Scripts/s{i}.cs")), 10 * (i + 1));
    }
    let report = scan_report(tmp.path());

    for summary in &report.categories {
        assert_eq!(summary.top_10.len(), summary.count.min(LEADERBOARD_LEN));
        assert!(summary
            .top_10
            .windows(2)
            .all(|w| w[0].size_bytes >= w[1].size_bytes));
        for (top, full) in summary.top_10.iter().zip(&summary.all_files) {
            assert_eq!(top.path, full.path);
        }
    }
}

#[test]
fn rescans_are_identical_except_timestamp() {
    let tmp = TempDir::new().unwrap();
    build_asset_tree(tmp.path());
    for i in 0..12 {
        write_bytes(&tmp.path().join(format!("Art/Textures/tile{i}.tga")), 500);
    }

    let at = Local::now();
    let first = build_report_at(scan(tmp.path(), WalkRules::default()).unwrap(), at);
    let second = build_report_at(scan(tmp.path(), WalkRules::default()).unwrap(), at);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn empty_root_produces_empty_report() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("only.meta"), 10);
    fs::create_dir_all(tmp.path().join(".hidden")).unwrap();

    let report = scan_report(tmp.path());
    assert_eq!(report.total_size_bytes, 0);
    assert!(report.categories.is_empty());
}

#[test]
fn missing_root_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let aggregation = scan(tmp.path().join("Assets"), WalkRules::default()).unwrap();
    assert!(aggregation.stats.root_missing);
    assert_eq!(aggregation.total_bytes, 0);
    assert!(build_report(aggregation).is_empty());
}

#[test]
fn stats_count_sidecars_and_files() {
    let tmp = TempDir::new().unwrap();
    build_asset_tree(tmp.path());
    let aggregation = scan(tmp.path(), WalkRules::default()).unwrap();
    assert_eq!(aggregation.stats.files_recorded, 9);
    assert_eq!(aggregation.stats.sidecars_excluded, 1);
    assert_eq!(aggregation.stats.files_skipped, 0);
    assert_eq!(aggregation.file_count(), 9);
}

/// A dangling symlink fails to stat; it must be skipped without aborting.
#[cfg(unix)]
#[test]
fn broken_symlink_is_skipped() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("ok.png"), 64);
    std::os::unix::fs::symlink(tmp.path().join("gone.png"), tmp.path().join("dangling.png"))
        .unwrap();

    let aggregation = scan(tmp.path(), WalkRules::default()).unwrap();
    assert_eq!(aggregation.stats.files_skipped, 1);
    assert_eq!(aggregation.total_bytes, 64);
}

/// A linked directory is neither descended nor counted as a file.
#[cfg(unix)]
#[test]
fn symlinked_directory_is_not_followed() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("Assets");
    write_bytes(&root.join("ok.png"), 64);
    write_bytes(&tmp.path().join("Shared/huge.fbx"), 4_096);
    std::os::unix::fs::symlink(tmp.path().join("Shared"), root.join("Linked")).unwrap();

    let aggregation = scan(&root, WalkRules::default()).unwrap();
    assert_eq!(aggregation.total_bytes, 64);
    assert_eq!(aggregation.stats.files_recorded, 1);
    assert_eq!(aggregation.stats.files_skipped, 0);

    let report = build_report(aggregation);
    assert_eq!(all_paths(&report), vec!["ok.png"]);
}

/// The hidden-directory prefix applies below the root, never to the root.
#[test]
fn dot_named_root_is_scanned() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join(".unity_assets");
    build_asset_tree(&root);

    let report = scan_report(&root);
    assert_eq!(report.total_size_bytes, 21_600);
    assert!(!all_paths(&report).iter().any(|p| p.starts_with(".git")));
}

#[test]
fn report_file_round_trips() {
    let tmp = TempDir::new().unwrap();
    build_asset_tree(tmp.path().join("Assets").as_path());
    let report = scan_report(&tmp.path().join("Assets"));

    let path = tmp.path().join("metrics/assets_report.json");
    write_report(&report, &path).unwrap();
    assert_eq!(load_report(&path).unwrap(), report);
}

#[test]
fn unreadable_root_fails_fast() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("Assets");
    write_bytes(&file, 1);
    let err = scan(&file, WalkRules::default()).unwrap_err();
    assert!(matches!(err, AssetError::RootUnreadable { .. }));
}
