// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the viewer lifecycle.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Lifecycle transitions of a viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// An instance was built and loaded with none to replace.
    Mounted {
        /// Number of pages loaded into the instance.
        page_count: usize,
    },

    /// A live instance was torn down and replaced by a new one.
    Rebuilt {
        /// Number of pages loaded into the new instance.
        page_count: usize,
    },

    /// A live instance was released.
    Unmounted,

    /// Mounting was skipped because no surface was available.
    MountSkipped,

    /// Construction or loading failed; no instance is live.
    MountFailed {
        /// Stable error code (see `ViewerError::code`).
        code: String,
    },

    /// The widget failed during teardown; the failure was swallowed.
    TeardownFailed {
        /// Stable error code (see `ViewerError::code`).
        code: String,
    },
}

/// A single diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Viewer lifecycle transition.
    Lifecycle {
        /// The transition.
        #[serde(flatten)]
        event: LifecycleEvent,
    },

    /// Non-critical issue, e.g. a swallowed teardown error.
    Warning {
        /// Brief description of the warning
        message: String,
    },

    /// Failure that left the viewer without an instance.
    Error {
        /// Brief description of the error
        message: String,
    },
}
