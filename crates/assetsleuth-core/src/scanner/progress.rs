use std::time::Duration;

/// Counters describing one completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files sized and placed in a bucket.
    pub files_recorded: u64,
    /// Sidecar files dropped by the walker.
    pub sidecars_excluded: u64,
    /// Files skipped because of a per-file I/O error.
    pub files_skipped: u64,
    /// The scan root did not exist; nothing was walked.
    pub root_missing: bool,
    pub duration: Duration,
}
