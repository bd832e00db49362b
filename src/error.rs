// SPDX-License-Identifier: MPL-2.0
//! Crate-level error for configuration, file access and the CLI host.
//!
//! The viewer lifecycle itself never returns this type: its failures are
//! reported as [`ViewerError`] inside lifecycle effects.

use std::fmt;

use crate::diagnostics::ExportError;
use crate::domain::error::ViewerError;

#[derive(Debug, Clone)]
pub enum Error {
    /// File could not be read or written.
    Io(String),
    /// `settings.toml` could not be parsed or encoded.
    Config(String),
    /// Mounting the viewer failed.
    Viewer(ViewerError),
    /// The diagnostics report could not be exported.
    Diagnostics(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "file access failed: {msg}"),
            Error::Config(msg) => write!(f, "invalid settings: {msg}"),
            Error::Viewer(err) => write!(f, "viewer: {err}"),
            Error::Diagnostics(msg) => write!(f, "diagnostics export failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Error::Viewer(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

impl From<ViewerError> for Error {
    fn from(err: ViewerError) -> Self {
        Error::Viewer(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<ExportError> for Error {
    fn from(err: ExportError) -> Self {
        Error::Diagnostics(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
