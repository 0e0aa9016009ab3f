// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for carousel activity tracking.
//!
//! This module defines the events that can be captured while a carousel is
//! running, plus the serializable form used for JSON export.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Where a slide's image bytes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Local filesystem path.
    Path,
    /// Remote `http`/`https` URL.
    Url,
}

/// How a slide's load attempt settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    Success,
    Error,
}

/// Categories of warnings the carousel can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// Props were combined in a way the element cannot honor.
    InvalidConfiguration,
    /// The source format is not supported.
    UnsupportedFormat,
    /// A network-related issue occurred.
    NetworkError,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors the carousel can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Input/output error (file read failures).
    IoError,
    /// Image decoding error.
    DecodeError,
    /// Network fetch error.
    NetworkError,
    /// Other error type not covered by specific categories.
    Other,
}

impl From<&LoadError> for ErrorType {
    fn from(error: &LoadError) -> Self {
        match error {
            LoadError::EmptySource => ErrorType::Other,
            LoadError::Io(_) => ErrorType::IoError,
            LoadError::Fetch(_) => ErrorType::NetworkError,
            LoadError::Decode(_) => ErrorType::DecodeError,
        }
    }
}

/// A warning with its category and human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    /// Category of the warning.
    pub warning_type: WarningType,
    /// Human-readable description.
    pub message: String,
    /// Module that raised the warning, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_module: Option<String>,
}

impl WarningEvent {
    /// Creates a warning event with no source module.
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
            source_module: None,
        }
    }

    /// Attaches the raising module's name.
    #[must_use]
    pub fn with_source(mut self, source_module: impl Into<String>) -> Self {
        self.source_module = Some(source_module.into());
        self
    }
}

/// An error with its category and human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvent {
    /// Category of the error.
    pub error_type: ErrorType,
    /// Human-readable description.
    pub message: String,
    /// Module that raised the error, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_module: Option<String>,
}

impl ErrorEvent {
    /// Creates an error event with no source module.
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            source_module: None,
        }
    }
}

/// A diagnostic event with its capture timestamp.
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

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A slide began resolving its source.
    LoadStarted {
        /// Where the bytes are being fetched from.
        source: SourceKind,
    },

    /// A slide settled its load outcome.
    LoadSettled {
        /// Whether the load succeeded or failed.
        outcome: LoadOutcome,
    },

    /// A recoverable misuse or environment issue.
    Warning {
        /// The warning details.
        event: WarningEvent,
    },

    /// An operation failure.
    Error {
        /// The error details.
        event: ErrorEvent,
    },
}

/// Export form of an event, with the timestamp rebased to milliseconds
/// since collection started.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since the collector was created.
    pub timestamp_ms: u64,
    /// The event payload.
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    /// Rebases an event timestamp against the collection origin.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(timestamp: Instant, origin: Instant, kind: DiagnosticEventKind) -> Self {
        let timestamp_ms = timestamp.saturating_duration_since(origin).as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}
