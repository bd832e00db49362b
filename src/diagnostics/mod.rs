// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording viewer lifecycle activity.
//!
//! Viewers send events through a cheap [`DiagnosticsHandle`]; the
//! [`DiagnosticsCollector`] keeps them in a memory-bounded
//! [`CircularBuffer`] and exports them as a JSON [`DiagnosticReport`].
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event, see [`DiagnosticEventKind`]
//! - [`LifecycleEvent`]: Mount, rebuild and teardown transitions

mod buffer;
mod collector;
mod events;
mod export;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, LifecycleEvent};
pub use export::{generate_default_filename, write_atomic, ExportError};
pub use report::{DiagnosticReport, ReportEntry, ReportMetadata, ReportSummary};
