use serde_json::{Map, Value};

use crate::domain::DomainError;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Strip the Markdown fence a model may wrap around its JSON.
///
/// Surrounding whitespace is trimmed, then a leading ```` ```json ```` opener
/// (or a bare ```` ``` ```` opener if the tagged one is absent) and a trailing
/// ```` ``` ```` are removed. Fences surrounded by prose are left alone.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut cleaned = raw.trim();

    if let Some(rest) = cleaned.strip_prefix(JSON_FENCE) {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix(FENCE) {
        cleaned = rest;
    }

    if let Some(rest) = cleaned.strip_suffix(FENCE) {
        cleaned = rest;
    }

    cleaned.trim()
}

/// Strip fences and parse the remainder as a JSON object.
///
/// Exactly one parse is attempted. Failures become
/// [`DomainError::MalformedOutput`] carrying the parser message and an excerpt
/// of `raw`.
pub fn parse_json_object(raw: &str) -> Result<Map<String, Value>, DomainError> {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(DomainError::malformed_output(
            format!("expected a JSON object, found {}", json_kind(&other)),
            raw,
        )),
        Err(e) => Err(DomainError::malformed_output(e, raw)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
