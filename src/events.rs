// SPDX-License-Identifier: MIT
// Autocomplete telemetry — event kinds, reasons, and property payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Flat property mapping forwarded to the sink alongside an event kind.
pub type PropertyMap = Map<String, Value>;

// ─── Event kinds ──────────────────────────────────────────────────────────────

/// Closed set of autocomplete lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The user paused typing and a suggestion was requested.
    SuggestionRequested,
    /// A suggestion survived filtering and was delivered to the UI.
    SuggestionReturned,
    /// A raw model response was discarded before reaching the user.
    SuggestionFiltered,
    /// The user accepted a visible suggestion.
    SuggestionAccepted,
    /// The user dismissed a visible suggestion.
    SuggestionDismissed,
    /// The backing-model round-trip completed.
    LlmRequestCompleted,
    /// The backing-model round-trip failed.
    LlmRequestFailed,
}

impl EventKind {
    /// Stable wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::SuggestionRequested => "suggestion_requested",
            EventKind::SuggestionReturned => "suggestion_returned",
            EventKind::SuggestionFiltered => "suggestion_filtered",
            EventKind::SuggestionAccepted => "suggestion_accepted",
            EventKind::SuggestionDismissed => "suggestion_dismissed",
            EventKind::LlmRequestCompleted => "llm_request_completed",
            EventKind::LlmRequestFailed => "llm_request_failed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Reasons ──────────────────────────────────────────────────────────────────

/// Error returned when a reason string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reason: {0:?}")]
pub struct UnknownReason(pub String);

/// Why a raw model response was filtered out before reaching the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterReason {
    EmptyResponse,
    UnwantedPattern,
    TooShort,
    ModelNotLoaded,
    NoCredentials,
}

impl FilterReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterReason::EmptyResponse => "empty_response",
            FilterReason::UnwantedPattern => "unwanted_pattern",
            FilterReason::TooShort => "too_short",
            FilterReason::ModelNotLoaded => "model_not_loaded",
            FilterReason::NoCredentials => "no_credentials",
        }
    }
}

impl fmt::Display for FilterReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterReason {
    type Err = UnknownReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty_response" => Ok(FilterReason::EmptyResponse),
            "unwanted_pattern" => Ok(FilterReason::UnwantedPattern),
            "too_short" => Ok(FilterReason::TooShort),
            "model_not_loaded" => Ok(FilterReason::ModelNotLoaded),
            "no_credentials" => Ok(FilterReason::NoCredentials),
            other => Err(UnknownReason(other.to_string())),
        }
    }
}

/// How the user dismissed a visible suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    Escape,
    ContinuedTyping,
    ClickedAway,
    Timeout,
}

impl DismissReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DismissReason::Escape => "escape",
            DismissReason::ContinuedTyping => "continued_typing",
            DismissReason::ClickedAway => "clicked_away",
            DismissReason::Timeout => "timeout",
        }
    }
}

impl fmt::Display for DismissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DismissReason {
    type Err = UnknownReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "escape" => Ok(DismissReason::Escape),
            "continued_typing" => Ok(DismissReason::ContinuedTyping),
            "clicked_away" => Ok(DismissReason::ClickedAway),
            "timeout" => Ok(DismissReason::Timeout),
            other => Err(UnknownReason(other.to_string())),
        }
    }
}

// ─── Backing-model payloads ───────────────────────────────────────────────────

/// Timing and token usage for a completed backing-model request.
///
/// Token counts are only present when the provider reports usage; absent
/// counts stay absent in the forwarded mapping rather than becoming null.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmRequestStats {
    /// Round-trip latency in milliseconds.
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
}

/// Timing and error description for a failed backing-model request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmRequestFailure {
    /// Time spent before the request failed, in milliseconds.
    pub latency_ms: u64,
    /// Human-readable error description from the provider client.
    pub error: String,
}

// ─── Property assembly ────────────────────────────────────────────────────────

/// Builder for the flat property mapping attached to each event.
///
/// `field` always records the key: a `None` value passes through as JSON
/// null so downstream analysis can tell "not known" apart from "not sent".
/// `merge` flattens a serializable payload and honors that payload's own
/// skip rules, so its absent optional fields stay absent here too.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: PropertyMap,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` with `value`, forwarding `None` as JSON null.
    pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.entries.insert(key.to_string(), value);
        self
    }

    /// Flatten every serialized field of `payload` into the mapping.
    pub fn merge(mut self, payload: &impl Serialize) -> Self {
        if let Ok(Value::Object(fields)) = serde_json::to_value(payload) {
            self.entries.extend(fields);
        }
        self
    }

    pub fn into_map(self) -> PropertyMap {
        self.entries
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
