//! Run configuration — where to scan, what to skip, where artifacts go.
use crate::scanner::walker::WalkRules;
use std::path::PathBuf;

/// Default scan root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "Assets";
/// Default artifact directory.
pub const DEFAULT_OUTPUT_DIR: &str = "metrics";
pub const DEFAULT_REPORT_FILE: &str = "assets_report.json";
pub const DEFAULT_LISTING_FILE: &str = "assets_listing.csv";
pub const DEFAULT_ARCHIVE: &str = "metrics_report.zip";
/// Per-asset metadata companions written by the Unity asset pipeline.
pub const DEFAULT_SIDECAR_SUFFIX: &str = ".meta";
pub const DEFAULT_HIDDEN_PREFIX: &str = ".";

/// Everything one invocation needs to know about paths and filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub report_file_name: String,
    pub listing_file_name: String,
    /// Written outside `output_dir` so the archive never contains itself.
    pub archive_path: PathBuf,
    pub sidecar_suffix: String,
    pub hidden_prefix: String,
    /// Create `root` when it does not exist. The scan itself is still a no-op.
    pub create_missing_root: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            report_file_name: DEFAULT_REPORT_FILE.to_string(),
            listing_file_name: DEFAULT_LISTING_FILE.to_string(),
            archive_path: PathBuf::from(DEFAULT_ARCHIVE),
            sidecar_suffix: DEFAULT_SIDECAR_SUFFIX.to_string(),
            hidden_prefix: DEFAULT_HIDDEN_PREFIX.to_string(),
            create_missing_root: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file_name)
    }

    pub fn listing_path(&self) -> PathBuf {
        self.output_dir.join(&self.listing_file_name)
    }

    /// The subset of the configuration the tree walker consults.
    pub fn walk_rules(&self) -> WalkRules {
        WalkRules {
            sidecar_suffix: self.sidecar_suffix.clone(),
            hidden_prefix: self.hidden_prefix.clone(),
        }
    }
}
