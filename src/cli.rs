use assetsleuth_core::config::{
    AnalyzerConfig, DEFAULT_ARCHIVE, DEFAULT_HIDDEN_PREFIX, DEFAULT_LISTING_FILE,
    DEFAULT_OUTPUT_DIR, DEFAULT_REPORT_FILE, DEFAULT_ROOT, DEFAULT_SIDECAR_SUFFIX,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "assetsleuth",
    version,
    about = "Inventory a game asset tree: size report, charts, and a zipped bundle"
)]
pub struct Cli {
    #[arg(long, global = true, env = "ASSETSLEUTH_ROOT", default_value = DEFAULT_ROOT, help = "Asset tree to scan")]
    pub root: PathBuf,
    #[arg(
        long,
        global = true,
        env = "ASSETSLEUTH_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory for the report, listing and charts"
    )]
    pub output_dir: PathBuf,
    #[arg(
        long,
        global = true,
        env = "ASSETSLEUTH_REPORT_NAME",
        default_value = DEFAULT_REPORT_FILE,
        help = "Report file name inside the output directory"
    )]
    pub report_name: String,
    #[arg(
        long,
        global = true,
        env = "ASSETSLEUTH_LISTING_NAME",
        default_value = DEFAULT_LISTING_FILE,
        help = "CSV listing file name inside the output directory"
    )]
    pub listing_name: String,
    #[arg(
        long,
        global = true,
        env = "ASSETSLEUTH_ARCHIVE",
        default_value = DEFAULT_ARCHIVE,
        help = "Zip file to package the output directory into"
    )]
    pub archive: PathBuf,
    #[arg(
        long,
        global = true,
        env = "ASSETSLEUTH_SIDECAR_SUFFIX",
        default_value = DEFAULT_SIDECAR_SUFFIX,
        help = "Exclude files ending with this suffix"
    )]
    pub sidecar_suffix: String,
    #[arg(
        long,
        global = true,
        env = "ASSETSLEUTH_HIDDEN_PREFIX",
        default_value = DEFAULT_HIDDEN_PREFIX,
        help = "Do not descend into directories starting with this prefix"
    )]
    pub hidden_prefix: String,
    #[arg(
        long,
        global = true,
        env = "ASSETSLEUTH_NO_CREATE_ROOT",
        help = "Leave a missing asset root uncreated"
    )]
    pub no_create_root: bool,
    #[arg(short, long, global = true, help = "Log per-file detail")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Analyze, draw charts, then archive (default)
    Run,
    /// Scan the asset tree and write the report
    Analyze,
    /// Draw charts from an existing report
    Charts,
    /// Zip the output directory
    Archive,
}

impl Cli {
    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            root: self.root.clone(),
            output_dir: self.output_dir.clone(),
            report_file_name: self.report_name.clone(),
            listing_file_name: self.listing_name.clone(),
            archive_path: self.archive.clone(),
            sidecar_suffix: self.sidecar_suffix.clone(),
            hidden_prefix: self.hidden_prefix.clone(),
            create_missing_root: !self.no_create_root,
        }
    }
}
