// SPDX-License-Identifier: MPL-2.0
//! Viewer lifecycle errors.

use std::fmt;

/// Failures the viewer lifecycle can observe.
///
/// None of these ever propagate out of teardown. `MissingSurface` is a
/// precondition that degrades to a no-op; the others are reported through
/// the lifecycle effect and diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// The mount surface was not available when mounting was requested.
    MissingSurface,

    /// The widget refused to construct an instance.
    ConstructionFailed(String),

    /// The widget could not load the page batch.
    LoadFailed(String),

    /// The widget failed while destroying an instance.
    TeardownFailed(String),
}

impl ViewerError {
    /// Short stable identifier, used in diagnostics events.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ViewerError::MissingSurface => "missing-surface",
            ViewerError::ConstructionFailed(_) => "construction-failed",
            ViewerError::LoadFailed(_) => "load-failed",
            ViewerError::TeardownFailed(_) => "teardown-failed",
        }
    }
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::MissingSurface => write!(f, "Mount surface is not available"),
            ViewerError::ConstructionFailed(msg) => write!(f, "Widget construction failed: {msg}"),
            ViewerError::LoadFailed(msg) => write!(f, "Loading pages failed: {msg}"),
            ViewerError::TeardownFailed(msg) => write!(f, "Widget teardown failed: {msg}"),
        }
    }
}

impl std::error::Error for ViewerError {}
