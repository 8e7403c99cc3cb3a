//! Error taxonomy for every pipeline stage.
//!
//! Failures are contained at the smallest scope that produced them: a
//! `PerFileIo` skips one file, a `MissingReportInput` ends one downstream
//! stage. Only `RootUnreadable` aborts a scan.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset root not found: {}", path.display())]
    MissingRootDirectory { path: PathBuf },

    #[error("cannot read asset root {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("skipped {}: {source}", path.display())]
    PerFileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report input not found: {}", path.display())]
    MissingReportInput { path: PathBuf },

    #[error("failed to write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read report {}: {source}", path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse report {}: {source}", path.display())]
    ReportParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to export listing {}: {source}", path.display())]
    ListingExport {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write archive {}: {source}", path.display())]
    ArchiveWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    /// `true` for errors scoped to a single file, which a scan skips over.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PerFileIo { .. })
    }

    /// The path the error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MissingRootDirectory { path }
            | Self::RootUnreadable { path, .. }
            | Self::PerFileIo { path, .. }
            | Self::MissingReportInput { path }
            | Self::ReportWrite { path, .. }
            | Self::ReportRead { path, .. }
            | Self::ReportParse { path, .. }
            | Self::ListingExport { path, .. }
            | Self::ArchiveWrite { path, .. } => path,
        }
    }
}
