// SPDX-License-Identifier: MIT
//! High-level capture helpers for autocomplete interaction events.
//!
//! `TelemetryReporter` wraps an optional [`TelemetrySink`] and provides one
//! named method per event kind so call-sites don't assemble property
//! mappings by hand.

use std::sync::Arc;

use tracing::debug;

use crate::context::AutocompleteContext;
use crate::events::{
    DismissReason, EventKind, FilterReason, LlmRequestFailure, LlmRequestStats, Properties,
};
use crate::sink::TelemetrySink;

// ─── TelemetryReporter ────────────────────────────────────────────────────────

/// Translates autocomplete lifecycle events into uniformly shaped telemetry
/// records and forwards them to the attached sink.
///
/// The sink handle is optional: a reporter without one (telemetry opted out
/// or not yet initialized) silently drops every capture. That is the normal
/// disabled state, not an error. No capture method can fail or block, and
/// the reporter itself holds no mutable state, so concurrent captures from
/// multiple callers are safe.
#[derive(Clone, Default)]
pub struct TelemetryReporter {
    sink: Option<Arc<dyn TelemetrySink>>,
}

impl TelemetryReporter {
    /// Reporter wired to `sink`.
    pub fn new(sink: Arc<dyn TelemetrySink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Reporter with no sink; every capture becomes a silent no-op.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// True when a sink is attached.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    // ─── Capture methods ─────────────────────────────────────────────────────

    /// The user paused typing and a suggestion was requested.
    ///
    /// `user_text_length` is the length of the chat input at request time.
    pub fn suggestion_requested(&self, ctx: &AutocompleteContext, user_text_length: usize) {
        let props = ctx
            .request_fields(Properties::new())
            .field("userTextLength", user_text_length);
        self.dispatch(EventKind::SuggestionRequested, Some(props));
    }

    /// The backing-model round-trip completed.
    pub fn llm_request_completed(&self, stats: LlmRequestStats, ctx: &AutocompleteContext) {
        let props = ctx.model_fields(Properties::new().merge(&stats));
        self.dispatch(EventKind::LlmRequestCompleted, Some(props));
    }

    /// The backing-model round-trip failed.
    pub fn llm_request_failed(&self, failure: LlmRequestFailure, ctx: &AutocompleteContext) {
        let props = ctx.model_fields(Properties::new().merge(&failure));
        self.dispatch(EventKind::LlmRequestFailed, Some(props));
    }

    /// A suggestion survived filtering and was delivered to the UI.
    pub fn suggestion_returned(&self, ctx: &AutocompleteContext, suggestion_length: usize) {
        let props = ctx
            .model_fields(Properties::new())
            .field("suggestionLength", suggestion_length);
        self.dispatch(EventKind::SuggestionReturned, Some(props));
    }

    /// A raw model response was discarded before reaching the user.
    pub fn suggestion_filtered(&self, reason: FilterReason, ctx: &AutocompleteContext) {
        let props = ctx.model_fields(Properties::new().field("reason", reason));
        self.dispatch(EventKind::SuggestionFiltered, Some(props));
    }

    /// The user accepted a visible suggestion.
    ///
    /// Terminal UI action: model/provider context was already captured when
    /// the suggestion was returned, so none is attached here.
    pub fn suggestion_accepted(&self, suggestion_length: usize) {
        let props = Properties::new().field("suggestionLength", suggestion_length);
        self.dispatch(EventKind::SuggestionAccepted, Some(props));
    }

    /// The user dismissed a visible suggestion. Context-independent, like
    /// [`Self::suggestion_accepted`].
    pub fn suggestion_dismissed(&self, reason: DismissReason) {
        let props = Properties::new().field("dismissReason", reason);
        self.dispatch(EventKind::SuggestionDismissed, Some(props));
    }

    // ─── Private ─────────────────────────────────────────────────────────────

    /// Forward one event to the sink, if any.
    ///
    /// `properties` stays optional so a payload-free event kind can be
    /// added without touching this path; every current capture method
    /// passes `Some`.
    fn dispatch(&self, kind: EventKind, properties: Option<Properties>) {
        let Some(sink) = &self.sink else {
            return;
        };
        let properties = properties.map(Properties::into_map);
        sink.capture_event(kind, properties.as_ref());
        match &properties {
            Some(props) => debug!(properties = ?props, "autocomplete telemetry event: {kind}"),
            None => debug!("autocomplete telemetry event: {kind}"),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    #[test]
    fn disabled_reporter_reports_disabled() {
        assert!(!TelemetryReporter::disabled().is_enabled());
        assert!(!TelemetryReporter::default().is_enabled());
    }

    #[test]
    fn payload_free_dispatch_forwards_none() {
        let sink = Arc::new(RecordingSink::new());
        let reporter = TelemetryReporter::new(sink.clone());

        reporter.dispatch(EventKind::SuggestionAccepted, None);

        let events = sink.captured();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::SuggestionAccepted);
        assert_eq!(events[0].properties, None);
    }

    #[test]
    fn cloned_reporter_shares_the_sink() {
        let sink = Arc::new(RecordingSink::new());
        let reporter = TelemetryReporter::new(sink.clone());

        reporter.clone().suggestion_accepted(3);
        reporter.suggestion_dismissed(DismissReason::Escape);

        assert_eq!(sink.captured().len(), 2);
    }
}
