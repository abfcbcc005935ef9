// SPDX-License-Identifier: MIT
// Autocomplete telemetry — opt-in configuration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::reporter::TelemetryReporter;
use crate::sink::TelemetrySink;

/// Autocomplete telemetry opt-in (`[telemetry]` in config.toml).
///
/// Default: disabled. Interaction events are only forwarded after the user
/// opts in.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Forward autocomplete interaction events to the telemetry sink.
    pub enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}

impl TelemetryConfig {
    /// Build a reporter honoring the opt-in: when disabled, the sink is not
    /// attached and every capture is a no-op.
    pub fn reporter(&self, sink: Arc<dyn TelemetrySink>) -> TelemetryReporter {
        if self.enabled {
            TelemetryReporter::new(sink)
        } else {
            TelemetryReporter::disabled()
        }
    }
}
