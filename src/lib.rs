// SPDX-License-Identifier: MIT
//! Chat autocomplete telemetry — suggestion lifecycle event reporting.
//!
//! The reporter receives discrete interaction events from the autocomplete
//! feature (suggestion requested, returned, filtered, accepted, dismissed,
//! and backing-model request completed/failed), enriches them with shared
//! request context, and forwards each one synchronously to a
//! [`TelemetrySink`] when one is attached.
//!
//! There is no buffering, batching, retry, or sampling here: every capture
//! is an independent best-effort forward, and a reporter built without a
//! sink (telemetry opted out or not yet initialized) drops events silently.
//! No capture path can fail or block.

pub mod config;
pub mod context;
pub mod events;
pub mod reporter;
pub mod sink;

pub use config::TelemetryConfig;
pub use context::AutocompleteContext;
pub use events::{
    DismissReason, EventKind, FilterReason, LlmRequestFailure, LlmRequestStats, Properties,
    PropertyMap, UnknownReason,
};
pub use reporter::TelemetryReporter;
pub use sink::{CapturedEvent, RecordingSink, TelemetrySink};
