// SPDX-License-Identifier: MPL-2.0
//! Collects lifecycle events from any number of handles into one log.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::export::{write_atomic, ExportError};
use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    LifecycleEvent, ReportEntry, ReportMetadata,
};

/// Sending side of the lifecycle log.
///
/// Cloning is cheap. Sending never blocks: an event is dropped when the
/// channel is full or the collector is gone. The channel holds as many
/// events as the collector's log.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_lifecycle(&self, event: LifecycleEvent) {
        self.send(DiagnosticEventKind::Lifecycle { event });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        match self.tx.try_send(DiagnosticEvent::new(kind)) {
            Ok(()) | Err(TrySendError::Disconnected(_)) => {}
            Err(TrySendError::Full(_)) => {
                tracing::trace!("diagnostics channel full, event dropped");
            }
        }
    }
}

/// Receiving side: drains handles into a bounded [`CircularBuffer`] and
/// produces [`DiagnosticReport`]s.
pub struct DiagnosticsCollector {
    log: CircularBuffer<DiagnosticEvent>,
    rx: Receiver<DiagnosticEvent>,
    tx: Sender<DiagnosticEvent>,
    started: Instant,
    started_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (tx, rx) = bounded(capacity.value());
        Self {
            log: CircularBuffer::new(capacity),
            rx,
            tx,
            started: Instant::now(),
            started_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            tx: self.tx.clone(),
        }
    }

    /// Moves every queued event into the log.
    ///
    /// Events only become visible to [`iter`](Self::iter) and reports after
    /// this runs.
    pub fn process_pending(&mut self) {
        for event in self.rx.try_iter() {
            self.log.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Logged events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.log.iter()
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.log.capacity()
    }

    /// Snapshot of the current log.
    #[must_use]
    pub fn build_report(&self) -> DiagnosticReport {
        let entries: Vec<ReportEntry> = self
            .log
            .iter()
            .map(|event| ReportEntry::new(event.timestamp, self.started, event.kind.clone()))
            .collect();
        let metadata = ReportMetadata::new(self.started_utc, self.started.elapsed(), entries.len());
        DiagnosticReport::new(metadata, entries)
    }

    /// # Errors
    ///
    /// Fails if the report cannot be serialized.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.build_report().to_json()
    }

    /// Writes the report to `path` atomically and returns the path written.
    ///
    /// # Errors
    ///
    /// [`ExportError::Serialization`] if encoding fails, [`ExportError::Io`]
    /// if the file cannot be written.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<std::path::PathBuf, ExportError> {
        let path = path.as_ref();
        write_atomic(path, &self.export_json()?)?;
        Ok(path.to_path_buf())
    }
}
