// SPDX-License-Identifier: MIT
// Autocomplete telemetry — sink interface and in-memory recording sink.

use std::sync::Mutex;

use crate::events::{EventKind, PropertyMap};

/// Destination for captured autocomplete telemetry events.
///
/// Implementations are assumed non-blocking. Delivery, batching, and
/// failure handling are entirely the sink's concern: the reporter never
/// inspects the outcome of a capture.
pub trait TelemetrySink: Send + Sync {
    /// Record one event. `properties` is a flat scalar mapping; `None`
    /// means the event carries no payload beyond its kind.
    fn capture_event(&self, kind: EventKind, properties: Option<&PropertyMap>);
}

// ─── RecordingSink ────────────────────────────────────────────────────────────

/// One event as observed by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedEvent {
    pub kind: EventKind,
    pub properties: Option<PropertyMap>,
}

/// In-memory sink that records every captured event, in order.
///
/// Used by the test suite to assert exactly what the reporter forwards.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<CapturedEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event captured so far.
    pub fn captured(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl TelemetrySink for RecordingSink {
    fn capture_event(&self, kind: EventKind, properties: Option<&PropertyMap>) {
        // A poisoned lock drops the event rather than panicking; telemetry
        // must never take the caller down.
        if let Ok(mut events) = self.events.lock() {
            events.push(CapturedEvent {
                kind,
                properties: properties.cloned(),
            });
        }
    }
}
