//! uselessfacts response parser.

use serde_json::Value;

/// Extracts the `text` field.
pub fn parse_fact(body: &Value) -> Option<String> {
    body.get("text")?.as_str().map(str::to_string)
}
