// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification lifecycle events.
//!
//! Managers and queues report what they do (shown, deferred, dismissed,
//! timed out, dispatched) through a [`DiagnosticsHandle`]. Events are stored
//! in a memory-bounded circular buffer and can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and the receiving end
//! - [`DiagnosticReport`]: Serializable snapshot of the buffer

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
