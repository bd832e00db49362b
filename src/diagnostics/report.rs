// SPDX-License-Identifier: MPL-2.0
//! JSON report built from the collected lifecycle log.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DiagnosticEventKind, LifecycleEvent};

// =============================================================================
// Report Metadata
// =============================================================================

/// Report header. Times are RFC 3339 in UTC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// Random UUID v4, distinct for every report.
    pub report_id: String,
    pub generated_at: String,
    /// Crate version that produced the report.
    pub flipbook_version: String,
    pub started_at: String,
    pub duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, elapsed: Duration, event_count: usize) -> Self {
        Self {
            report_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now().to_rfc3339(),
            flipbook_version: env!("CARGO_PKG_VERSION").to_owned(),
            started_at: started_at.to_rfc3339(),
            duration_ms: millis(elapsed),
            event_count,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// =============================================================================
// Report Entry
// =============================================================================

/// One logged event, stamped relative to the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEntry {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl ReportEntry {
    /// Events recorded before `origin` get offset 0.
    #[must_use]
    pub fn new(recorded_at: Instant, origin: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            offset_ms: millis(recorded_at.saturating_duration_since(origin)),
            kind,
        }
    }
}

// =============================================================================
// Report Summary
// =============================================================================

/// Per-kind event counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub mounts: usize,
    pub rebuilds: usize,
    pub unmounts: usize,
    pub skipped_mounts: usize,
    pub failed_mounts: usize,
    pub teardown_failures: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl ReportSummary {
    fn count(&mut self, kind: &DiagnosticEventKind) {
        let slot = match kind {
            DiagnosticEventKind::Lifecycle { event } => match event {
                LifecycleEvent::Mounted { .. } => &mut self.mounts,
                LifecycleEvent::Rebuilt { .. } => &mut self.rebuilds,
                LifecycleEvent::Unmounted => &mut self.unmounts,
                LifecycleEvent::MountSkipped => &mut self.skipped_mounts,
                LifecycleEvent::MountFailed { .. } => &mut self.failed_mounts,
                LifecycleEvent::TeardownFailed { .. } => &mut self.teardown_failures,
            },
            DiagnosticEventKind::Warning { .. } => &mut self.warnings,
            DiagnosticEventKind::Error { .. } => &mut self.errors,
        };
        *slot += 1;
    }
}

impl<'a> FromIterator<&'a ReportEntry> for ReportSummary {
    fn from_iter<I: IntoIterator<Item = &'a ReportEntry>>(entries: I) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            summary.count(&entry.kind);
        }
        summary
    }
}

// =============================================================================
// Diagnostic Report
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

impl DiagnosticReport {
    /// Assembles a report; the summary is derived from `events`.
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<ReportEntry>) -> Self {
        Self {
            summary: events.iter().collect(),
            metadata,
            events,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Fails only if serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
