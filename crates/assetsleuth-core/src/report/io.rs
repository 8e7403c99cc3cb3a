//! Report persistence.
//!
//! The report is written to a temporary sibling and renamed into place, so
//! readers only ever observe a complete document at the fixed path.
use super::Report;
use crate::error::AssetError;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Serialize `report` as pretty JSON to `path`, creating parent directories.
pub fn write_report(report: &Report, path: &Path) -> Result<(), AssetError> {
    let write_err = |source: io::Error| AssetError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let staging = staging_path(path);
    let result = (|| -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&staging)?);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);
        fs::rename(&staging, path)
    })();

    if let Err(err) = result {
        let _ = fs::remove_file(&staging);
        return Err(write_err(err));
    }

    info!("Report written to {}", path.display());
    Ok(())
}

/// Load a report written by [`write_report`].
///
/// A missing file maps to [`AssetError::MissingReportInput`] so downstream
/// stages can skip their work with a diagnostic.
pub fn load_report(path: &Path) -> Result<Report, AssetError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AssetError::MissingReportInput {
                path: path.to_path_buf(),
            }
        } else {
            AssetError::ReportRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| AssetError::ReportParse {
        path: path.to_path_buf(),
        source,
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
