use std::sync::LazyLock;

use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

const FENCE_MARKER: &str = "```";

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:json)?\n([\s\S]*?)\n```").expect("fenced block pattern is valid")
});

/// Strip a markdown code fence wrapping the reply.
///
/// Only replies starting with a fence are touched, and only when a closing
/// fence is found; anything else is returned as is.
pub fn strip_code_fence(text: &str) -> &str {
    if !text.starts_with(FENCE_MARKER) {
        return text;
    }

    FENCED_BLOCK
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map_or(text, |inner| inner.as_str())
}

/// Turn a raw model reply into JSON, unwrapping a code fence first.
pub fn parse_model_output(text: &str) -> Result<serde_json::Value, CoreError> {
    let cleaned = strip_code_fence(text);

    serde_json::from_str(cleaned).map_err(|e| {
        tracing::warn!(error = %e, "Model returned invalid JSON");
        CoreError::InvalidModelOutput
    })
}
