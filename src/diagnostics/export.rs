// SPDX-License-Identifier: MPL-2.0
//! Writing diagnostic reports to disk.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Failure while exporting a report.
#[derive(Debug)]
pub enum ExportError {
    /// The report file could not be written or moved into place.
    Io(io::Error),
    /// The report could not be encoded as JSON.
    Serialization(serde_json::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot write report: {err}"),
            Self::Serialization(err) => write!(f, "cannot encode report: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(match self {
            Self::Io(err) => err,
            Self::Serialization(err) => err,
        })
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Report file name stamped with local time, e.g.
/// `flipbook_diagnostics_20240131_174502.json`.
#[must_use]
pub fn generate_default_filename() -> String {
    Local::now()
        .format("flipbook_diagnostics_%Y%m%d_%H%M%S.json")
        .to_string()
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

/// Writes `content` next to `path` first and renames it into place, so
/// readers never see a half-written report.
///
/// # Errors
///
/// Fails if the staging file cannot be written or renamed; the staging file
/// is removed on a failed rename.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let staging = staging_path(path);
    fs::write(&staging, content)?;

    fs::rename(&staging, path).inspect_err(|_| {
        let _ = fs::remove_file(&staging);
    })
}
