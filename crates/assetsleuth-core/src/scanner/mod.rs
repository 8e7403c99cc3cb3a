//! Scanner module — walks an asset tree and folds it into category buckets.
//!
//! The scan is a single sequential pass:
//! - **Walker:** [`walker::AssetWalker`] lazily yields candidate files,
//!   pruning hidden directories and dropping sidecar files.
//! - **Aggregator:** [`aggregate::aggregate`] sizes, classifies and
//!   accumulates each file, skipping individual failures.
pub mod aggregate;
pub mod progress;
pub mod walker;

pub use aggregate::{aggregate, Aggregation, Aggregator, CategoryBucket};
pub use progress::ScanStats;
pub use walker::{AssetWalker, WalkRules, WalkedFile};

use crate::error::AssetError;
use std::path::PathBuf;
use tracing::info;

/// Scan `root` with the given filter rules.
///
/// A missing root yields an empty aggregation (with a warning); only an
/// unreadable root is an error.
pub fn scan(root: impl Into<PathBuf>, rules: WalkRules) -> Result<Aggregation, AssetError> {
    let walker = AssetWalker::new(root, rules)?;
    info!("Scanning {}", walker.root().display());
    aggregate(walker)
}
