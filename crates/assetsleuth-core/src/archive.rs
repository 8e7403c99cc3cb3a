//! Archiver — packs the report output directory into one zip file.
//!
//! Only regular files physically under the source directory are packed;
//! symlinks are neither followed nor stored, so the archive can never pick
//! up content from outside the directory.
use crate::error::AssetError;
use crate::model::size::format_size;
use crate::scanner::aggregate::relative_path;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// What was written by [`create_archive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Entry names, in the order they were added.
    pub entries: Vec<String>,
    pub compressed_bytes: u64,
}

/// Zip every file under `source_dir` into `dest`.
///
/// Entry names are `<source dir name>/<relative path>`. A missing source
/// directory is a [`AssetError::MissingReportInput`]; any failure while
/// writing is an [`AssetError::ArchiveWrite`] and removes the partial file.
pub fn create_archive(source_dir: &Path, dest: &Path) -> Result<ArchiveSummary, AssetError> {
    if !source_dir.is_dir() {
        return Err(AssetError::MissingReportInput {
            path: source_dir.to_path_buf(),
        });
    }

    let result = write_archive(source_dir, dest);
    match result {
        Ok(entries) => {
            let compressed_bytes = fs::metadata(dest).map(|m| m.len()).unwrap_or(0);
            info!(
                "Archive {} created: {} entries, {}",
                dest.display(),
                entries.len(),
                format_size(compressed_bytes)
            );
            Ok(ArchiveSummary {
                path: dest.to_path_buf(),
                entries,
                compressed_bytes,
            })
        }
        Err(source) => {
            let _ = fs::remove_file(dest);
            Err(AssetError::ArchiveWrite {
                path: dest.to_path_buf(),
                source,
            })
        }
    }
}

fn write_archive(source_dir: &Path, dest: &Path) -> io::Result<Vec<String>> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(dest)?;
    // The destination may sit inside the source directory; never pack it.
    let dest_canonical = dest.canonicalize()?;

    let prefix = source_dir
        .canonicalize()?
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let mut entries = Vec::new();

    let walk = jwalk::WalkDir::new(source_dir)
        .parallelism(jwalk::Parallelism::Serial)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false)
        .min_depth(1);

    for entry in walk {
        let entry = entry.map_err(io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.canonicalize()? == dest_canonical {
            continue;
        }

        let relative = relative_path(source_dir, &path);
        let name = match &prefix {
            Some(prefix) => format!("{prefix}/{relative}"),
            None => relative,
        };
        debug!("Adding {name}");

        zip.start_file(name.as_str(), options).map_err(io::Error::other)?;
        io::copy(&mut File::open(&path)?, &mut zip)?;
        entries.push(name);
    }

    let mut writer = zip.finish().map_err(io::Error::other)?;
    io::Write::flush(&mut writer)?;
    Ok(entries)
}
