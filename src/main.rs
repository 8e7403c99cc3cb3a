//! AssetSleuth — game asset inventory and size report.
//!
//! Thin binary entry point. Scanning and reporting live in
//! `assetsleuth-core`, chart rendering in `assetsleuth-charts`.

mod cli;
mod pipeline;

use clap::Parser;
use cli::{Cli, Command};
use pipeline::StageStatus;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the run summary.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("AssetSleuth starting");

    let config = cli.config();
    let command = cli.command.unwrap_or(Command::Run);
    let status = match command {
        Command::Run => pipeline::run_all(&config),
        Command::Analyze => pipeline::analyze(&config),
        Command::Charts => pipeline::charts(&config),
        Command::Archive => pipeline::archive(&config),
    };

    if status == StageStatus::Failed {
        anyhow::bail!("{command:?} failed");
    }
    Ok(())
}
