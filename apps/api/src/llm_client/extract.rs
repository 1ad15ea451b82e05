//! Structured extraction: locating and parsing the JSON value embedded in a model reply.

use serde_json::Value;
use tracing::warn;

use super::template::Shape;
use super::ClientError;

/// Removes every ```json / ``` fence marker (and the newline right after it).
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
}

/// Returns the span from the first opening delimiter of `shape` to the last closing one.
///
/// When no closing delimiter follows the opening one, the rest of the text is returned
/// so the parse step can report it verbatim.
pub fn locate(text: &str, shape: Shape) -> Option<&str> {
    let (open, close) = shape.delimiters();
    let start = text.find(open)?;
    match text.rfind(close) {
        Some(end) if end > start => Some(&text[start..=end]),
        _ => Some(&text[start..]),
    }
}

/// Extracts, parses and shape-checks the JSON value in `content`.
pub fn extract_json(content: &str, shape: Shape) -> Result<Value, ClientError> {
    let cleaned = strip_code_fences(content);

    let Some(candidate) = locate(&cleaned, shape) else {
        warn!(expected = %shape, "No JSON {shape} found in model reply");
        return Err(ClientError::NoStructuredContent { expected: shape });
    };

    let value: Value = serde_json::from_str(candidate).map_err(|e| {
        warn!(raw = candidate, "Failed to parse model reply: {e}");
        ClientError::ParseFailure {
            raw: candidate.to_string(),
            reason: e.to_string(),
        }
    })?;

    if !shape.matches(&value) {
        warn!(raw = candidate, "Model reply parsed but is not a JSON {shape}");
        return Err(ClientError::ParseFailure {
            raw: candidate.to_string(),
            reason: format!("expected a JSON {shape}"),
        });
    }

    Ok(value)
}
