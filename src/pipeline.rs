//! Stage orchestration: analyze → charts → archive.
//!
//! Each stage contains its own failures. A failed or skipped stage is
//! logged and the next one is still attempted.
use anyhow::Context;
use assetsleuth_core::archive::create_archive;
use assetsleuth_core::report::{build_report, export_listing, render_summary, write_report, Report};
use assetsleuth_core::{scanner, AnalyzerConfig, AssetError};
use std::fs;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    /// Upstream input was missing; nothing to do.
    Skipped,
    Failed,
}

/// Run every stage. The result is the analyze stage's status.
pub fn run_all(config: &AnalyzerConfig) -> StageStatus {
    let analyzed = analyze(config);
    charts(config);
    archive(config);
    analyzed
}

/// Scan, write the report and listing, and print the summary.
pub fn analyze(config: &AnalyzerConfig) -> StageStatus {
    match analyze_report(config) {
        Ok(report) => {
            print!("{}", render_summary(&report));
            StageStatus::Completed
        }
        Err(err) => {
            error!("Analyze stage failed: {err:#}");
            StageStatus::Failed
        }
    }
}

fn analyze_report(config: &AnalyzerConfig) -> anyhow::Result<Report> {
    let aggregation = scanner::scan(&config.root, config.walk_rules())
        .with_context(|| format!("scanning {}", config.root.display()))?;

    if aggregation.stats.root_missing && config.create_missing_root {
        match fs::create_dir_all(&config.root) {
            Ok(()) => info!("Created empty asset root {}", config.root.display()),
            Err(err) => warn!("Could not create {}: {err}", config.root.display()),
        }
    }

    let report = build_report(aggregation);
    write_report(&report, &config.report_path()).context("saving report")?;

    // The listing is a convenience artifact; losing it does not fail the stage.
    if let Err(err) = export_listing(&report, &config.listing_path()) {
        error!("{err}");
    }
    Ok(report)
}

/// Render charts from the report on disk.
pub fn charts(config: &AnalyzerConfig) -> StageStatus {
    match assetsleuth_charts::generate_charts(&config.report_path(), &config.output_dir) {
        Ok(written) => {
            info!("{} charts generated", written.len());
            StageStatus::Completed
        }
        Err(err) if err.is_missing_input() => {
            warn!("{err}; skipping charts");
            StageStatus::Skipped
        }
        Err(err) => {
            error!("Chart stage failed: {err}");
            StageStatus::Failed
        }
    }
}

/// Package the output directory.
pub fn archive(config: &AnalyzerConfig) -> StageStatus {
    match create_archive(&config.output_dir, &config.archive_path) {
        Ok(summary) => {
            for entry in &summary.entries {
                info!("  + {entry}");
            }
            StageStatus::Completed
        }
        Err(err @ AssetError::MissingReportInput { .. }) => {
            warn!("{err}; skipping archive");
            StageStatus::Skipped
        }
        Err(err) => {
            error!("Archive stage failed: {err}");
            StageStatus::Failed
        }
    }
}
