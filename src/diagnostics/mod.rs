// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting carousel activity events.
//!
//! This module provides infrastructure for capturing diagnostic events while
//! a carousel is running, storing them in a memory-bounded circular buffer,
//! and exporting them as JSON for analysis.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Enum representing different types of diagnostic events
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`DiagnosticsHandle`]: Cheap-to-clone sender distributed to components
//!
//! Components never talk to the collector directly. They hold a
//! [`DiagnosticsHandle`] and fire events into a bounded channel; the owner of
//! the [`DiagnosticsCollector`] drains the channel on its own schedule.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, LoadOutcome, SerializableEvent,
    SourceKind, WarningEvent, WarningType,
};
