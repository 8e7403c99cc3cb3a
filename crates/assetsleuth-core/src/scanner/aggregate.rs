//! Classifier & aggregator — folds walked files into per-category buckets.
//!
//! Each visit either records one sized file or produces a recoverable
//! error that the fold logs and counts before moving on. The grand total is
//! incremented exactly once per recorded file, in lockstep with its bucket.
use crate::error::AssetError;
use crate::model::{classify_file_name, AssetRecord, Category};
use crate::scanner::progress::ScanStats;
use crate::scanner::walker::{AssetWalker, WalkedFile};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Files of one category, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBucket {
    pub category: Category,
    pub records: Vec<AssetRecord>,
    pub total_bytes: u64,
}

impl CategoryBucket {
    fn new(category: Category) -> Self {
        Self {
            category,
            records: Vec::new(),
            total_bytes: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The completed fold: one bucket per category plus the grand total.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub root: PathBuf,
    /// Indexed by [`Category::index`]; always holds every category.
    pub buckets: Vec<CategoryBucket>,
    pub total_bytes: u64,
    pub stats: ScanStats,
}

impl Aggregation {
    pub fn bucket(&self, category: Category) -> &CategoryBucket {
        &self.buckets[category.index()]
    }

    /// Buckets that received at least one file.
    pub fn non_empty(&self) -> impl Iterator<Item = &CategoryBucket> {
        self.buckets.iter().filter(|b| !b.is_empty())
    }

    pub fn file_count(&self) -> usize {
        self.buckets.iter().map(|b| b.records.len()).sum()
    }
}

/// Mutable accumulator owned by a single scan.
pub struct Aggregator {
    root: PathBuf,
    buckets: Vec<CategoryBucket>,
    total_bytes: u64,
    files_skipped: u64,
}

impl Aggregator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            buckets: Category::ALL.into_iter().map(CategoryBucket::new).collect(),
            total_bytes: 0,
            files_skipped: 0,
        }
    }

    /// Add an already-sized record to `category`.
    pub fn record(&mut self, category: Category, record: AssetRecord) {
        let bucket = &mut self.buckets[category.index()];
        bucket.total_bytes += record.size_bytes;
        self.total_bytes += record.size_bytes;
        bucket.records.push(record);
    }

    /// Size, classify and record one walked file.
    pub fn visit(&mut self, file: &WalkedFile) -> Result<(), AssetError> {
        // `metadata` follows symlinks, so a dangling link fails here and is skipped.
        let meta = fs::metadata(&file.path).map_err(|source| AssetError::PerFileIo {
            path: file.path.clone(),
            source,
        })?;
        if meta.is_dir() {
            debug!("Not descending linked directory {}", file.path.display());
            return Ok(());
        }

        let category = classify_file_name(&file.name);
        let relative_path = relative_path(&self.root, &file.path);
        debug!("{relative_path} -> {category} ({} B)", meta.len());
        self.record(
            category,
            AssetRecord::new(file.name.as_str(), relative_path, meta.len()),
        );
        Ok(())
    }

    fn skip(&mut self, err: &AssetError) {
        self.files_skipped += 1;
        warn!("{err}");
    }

    pub fn finish(self, mut stats: ScanStats) -> Aggregation {
        stats.files_recorded = self.buckets.iter().map(|b| b.records.len() as u64).sum();
        stats.files_skipped = self.files_skipped;
        Aggregation {
            root: self.root,
            buckets: self.buckets,
            total_bytes: self.total_bytes,
            stats,
        }
    }
}

/// Run the walker to completion, folding every file into an [`Aggregation`].
///
/// Per-file failures are logged and skipped; only a root-level failure
/// aborts the fold.
pub fn aggregate(mut walker: AssetWalker) -> Result<Aggregation, AssetError> {
    let start = Instant::now();
    let mut aggregator = Aggregator::new(walker.root());

    for visit in walker.by_ref() {
        let outcome = visit.and_then(|file| aggregator.visit(&file));
        if let Err(err) = outcome {
            if !err.is_recoverable() {
                return Err(err);
            }
            aggregator.skip(&err);
        }
    }

    let stats = ScanStats {
        sidecars_excluded: walker.sidecars_excluded(),
        root_missing: walker.is_root_missing(),
        duration: start.elapsed(),
        ..ScanStats::default()
    };
    let aggregation = aggregator.finish(stats);
    info!(
        "Scan complete: {} files, {} bytes, {} skipped, {} sidecars excluded in {:.2?}",
        aggregation.stats.files_recorded,
        aggregation.total_bytes,
        aggregation.stats.files_skipped,
        aggregation.stats.sidecars_excluded,
        aggregation.stats.duration
    );
    Ok(aggregation)
}

/// `path` relative to `root`, joined with `/` on every platform.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
