//! AssetSleuth charts — PNG visualisations of an asset report.
//!
//! Reads the report JSON produced by `assetsleuth-core` and rasterises three
//! charts into the report directory. Charts are drawn pixel by pixel into an
//! `image::RgbaImage`, with bitmap-font titles and labels.

pub mod bars;
pub mod canvas;
pub mod error;
pub mod palette;
pub mod pie;
pub mod ranking;
pub mod text;

pub use error::ChartError;
pub use ranking::{top_assets, RankedAsset, TOP_ASSETS_LEN};

use assetsleuth_core::report::{load_report, Report};
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DISTRIBUTION_CHART: &str = "01_distribution_pie_chart.png";
pub const COMPARISON_CHART: &str = "02_types_comparison_bar_chart.png";
pub const TOP_ASSETS_CHART: &str = "03_top_assets_bar_chart.png";

/// Load the report at `report_path` and render every chart into `out_dir`.
///
/// A missing report surfaces as [`ChartError::is_missing_input`]; callers
/// treat that as "nothing to draw".
pub fn generate_charts(report_path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, ChartError> {
    let report = load_report(report_path)?;
    render_charts(&report, out_dir)
}

/// Render every applicable chart for `report` into `out_dir`.
///
/// Returns the paths written, in chart order. A report without categories
/// produces no charts. A chart that does not apply to this report is removed
/// if an earlier run left one behind, so `out_dir` never mixes snapshots.
pub fn render_charts(report: &Report, out_dir: &Path) -> Result<Vec<PathBuf>, ChartError> {
    let charts = if report.is_empty() {
        info!("Report has no categories; no charts to draw");
        [
            (DISTRIBUTION_CHART, None),
            (COMPARISON_CHART, None),
            (TOP_ASSETS_CHART, None),
        ]
    } else {
        [
            (DISTRIBUTION_CHART, pie::render_distribution(report)),
            (COMPARISON_CHART, Some(bars::render_type_comparison(report))),
            (TOP_ASSETS_CHART, bars::render_top_assets(report)),
        ]
    };

    if charts.iter().any(|(_, image)| image.is_some()) {
        fs::create_dir_all(out_dir).map_err(|source| ChartError::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;
    }

    let mut written = Vec::new();
    for (file_name, image) in charts {
        let path = out_dir.join(file_name);
        match image {
            Some(image) => {
                save_png(&image, &path)?;
                info!("Chart saved: {}", path.display());
                written.push(path);
            }
            None => remove_stale(&path)?,
        }
    }
    Ok(written)
}

fn remove_stale(path: &Path) -> Result<(), ChartError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Removed stale chart {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ChartError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<(), ChartError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ChartError::Image {
            path: path.to_path_buf(),
            source,
        })
}
