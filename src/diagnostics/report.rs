// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostic report.
//!
//! Event timestamps are `Instant`s, which cannot be serialized, so the report
//! expresses them as milliseconds since collection started.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Metadata about when and for how long events were collected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    /// Version of the crate that generated the report
    pub crate_version: String,
    /// When diagnostic collection started (RFC 3339)
    pub collection_started_at: String,
    /// Duration of collection in milliseconds
    pub collection_duration_ms: u64,
    /// Total number of events in the report
    pub event_count: usize,
    /// Events lost to buffer overflow before the report was built
    #[serde(default)]
    pub evicted_count: u64,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
        evicted_count: u64,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
            evicted_count,
        }
    }
}

/// A diagnostic event that can be serialized to JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    /// The event data
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

/// Complete report: metadata, events, and per-type counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
    /// Number of events per `type` tag.
    pub counts: BTreeMap<String, usize>,
}

impl DiagnosticReport {
    /// Creates a new report with counts computed from the events.
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let mut counts = BTreeMap::new();
        for event in &events {
            *counts.entry(type_tag(&event.kind).to_string()).or_insert(0) += 1;
        }
        Self {
            metadata,
            events,
            counts,
        }
    }
}

fn type_tag(kind: &DiagnosticEventKind) -> &'static str {
    match kind {
        DiagnosticEventKind::Shown { .. } => "shown",
        DiagnosticEventKind::Deferred { .. } => "deferred",
        DiagnosticEventKind::DismissStarted { .. } => "dismiss_started",
        DiagnosticEventKind::Removed { .. } => "removed",
        DiagnosticEventKind::TimedOut { .. } => "timed_out",
        DiagnosticEventKind::Tapped { .. } => "tapped",
        DiagnosticEventKind::StaleWakeup { .. } => "stale_wakeup",
        DiagnosticEventKind::Enqueued { .. } => "enqueued",
        DiagnosticEventKind::Dispatched { .. } => "dispatched",
        DiagnosticEventKind::Cleared { .. } => "cleared",
    }
}
