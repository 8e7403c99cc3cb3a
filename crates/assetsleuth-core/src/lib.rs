//! AssetSleuth Core — scanning, classification, and reporting.
//!
//! This crate contains all business logic with zero rendering dependencies.
//! It is designed to be driven from the CLI but is equally usable from a
//! build script or a CI job.
//!
//! # Modules
//!
//! - [`model`] — Asset records, the category taxonomy, and size rounding.
//! - [`scanner`] — Tree walker and the classifier/aggregator fold.
//! - [`report`] — Report builder, JSON persistence, CSV export, console summary.
//! - [`archive`] — Zip packaging of the report output directory.
//! - [`config`] — Paths and filter rules for one run.
//! - [`error`] — Error taxonomy shared by every stage.
pub mod archive;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;

pub use config::AnalyzerConfig;
pub use error::AssetError;
