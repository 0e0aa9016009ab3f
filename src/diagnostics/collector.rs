// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing carousel events.
//!
//! This module provides the central collector that receives events from
//! carousel components and stores them in a circular buffer.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, LoadOutcome,
    SerializableEvent, SourceKind, WarningEvent,
};

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Creates a handle with no collector behind it.
    ///
    /// Every event sent through a detached handle is discarded. Embedders
    /// that do not collect diagnostics use this as their context handle.
    #[must_use]
    pub fn detached() -> Self {
        let (event_tx, _event_rx) = bounded(1);
        Self { event_tx }
    }

    /// Logs the start of a slide load.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_load_started(&self, source: SourceKind) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::LoadStarted { source });
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a settled load outcome.
    ///
    /// This method is non-blocking.
    pub fn log_load_settled(&self, outcome: LoadOutcome) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::LoadSettled { outcome });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning event.
    ///
    /// This method is non-blocking.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event: warning });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error event.
    ///
    /// This method is non-blocking.
    pub fn log_error(&self, error: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error });
        let _ = self.event_tx.try_send(event);
    }
}

/// Default channel capacity for event buffering.
/// This allows some buffering without excessive memory usage.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Central collector for diagnostic events.
///
/// The collector receives events through a channel and stores them in a
/// memory-bounded circular buffer. Old events are automatically evicted
/// when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    /// Circular buffer storing diagnostic events.
    buffer: CircularBuffer<DiagnosticEvent>,
    /// Receiver for incoming events.
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// When collection started (monotonic clock for export timestamps).
    collection_started_at: Instant,
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    ///
    /// Handles are cheap to clone and can be distributed to different
    /// parts of the application.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs a warning directly to the buffer (bypassing the channel).
    ///
    /// Use this for synchronous logging when you have direct access
    /// to the collector (e.g., in the main update loop).
    pub fn log_warning(&mut self, warning: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event: warning });
        self.buffer.push(event);
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns an iterator over stored warning events (oldest first).
    pub fn warnings(&self) -> impl Iterator<Item = &WarningEvent> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::Warning { event } => Some(event),
            _ => None,
        })
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports all collected events as pretty-printed JSON.
    ///
    /// Timestamps are rebased to milliseconds since the collector was
    /// created, so the export carries no wall-clock information.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        serde_json::to_string_pretty(&events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
