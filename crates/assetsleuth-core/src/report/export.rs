//! Flat CSV listing of every asset in a report.
use super::Report;
use crate::error::AssetError;
use crate::model::Category;
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct ListingRow<'a> {
    category: Category,
    name: &'a str,
    path: &'a str,
    size_bytes: u64,
    size_mb: f64,
}

/// Write one row per asset, in report order. Returns the number of rows.
pub fn export_listing(report: &Report, path: &Path) -> Result<usize, AssetError> {
    let csv_err = |source: csv::Error| AssetError::ListingExport {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    let mut rows = 0;
    for summary in &report.categories {
        for entry in &summary.all_files {
            writer
                .serialize(ListingRow {
                    category: summary.category,
                    name: &entry.name,
                    path: &entry.path,
                    size_bytes: entry.size_bytes,
                    size_mb: entry.size_mb,
                })
                .map_err(csv_err)?;
            rows += 1;
        }
    }
    writer.flush().map_err(|e| csv_err(e.into()))?;

    info!("Listing of {rows} assets written to {}", path.display());
    Ok(rows)
}
