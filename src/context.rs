// SPDX-License-Identifier: MIT
// Autocomplete telemetry — shared request context.

use crate::events::Properties;

/// Shared request context supplied by the autocomplete engine on every
/// event that occurs within an active completion attempt.
///
/// Owned and constructed by the caller; the reporter only reads it for the
/// duration of a single capture call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutocompleteContext {
    /// Identifier of the language model serving the request, when known.
    pub model_id: Option<String>,
    /// Identifier of the backing provider, when known.
    pub provider: Option<String>,
    /// True when the request used fill-in-the-middle rather than chat-style
    /// completion.
    pub used_fim: bool,
    /// Whether surrounding visible code was included in the request.
    pub has_visible_code_context: bool,
    /// Whether clipboard contents were included in the request.
    pub has_clipboard_context: bool,
}

impl AutocompleteContext {
    /// Model identification fields, attached to every in-flight event so
    /// downstream analysis can correlate by model, provider, and completion
    /// mode without a join. Unknown model/provider forward as null.
    pub(crate) fn model_fields(&self, props: Properties) -> Properties {
        props
            .field("modelId", &self.model_id)
            .field("provider", &self.provider)
            .field("usedFim", self.used_fim)
    }

    /// Full request-shaping fields, attached at suggestion-request time.
    pub(crate) fn request_fields(&self, props: Properties) -> Properties {
        self.model_fields(props)
            .field("hasVisibleCodeContext", self.has_visible_code_context)
            .field("hasClipboardContext", self.has_clipboard_context)
    }
}
