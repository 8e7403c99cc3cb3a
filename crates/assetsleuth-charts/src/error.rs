use assetsleuth_core::AssetError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Report(#[from] AssetError),

    #[error("cannot prepare chart directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write chart {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ChartError {
    /// `true` when the upstream report has not been produced yet.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::Report(AssetError::MissingReportInput { .. }))
    }
}
