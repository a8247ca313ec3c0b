//! catfact.ninja response parser.

use serde_json::Value;

/// Extracts the `fact` field.
pub fn parse_fact(body: &Value) -> Option<String> {
    body.get("fact")?.as_str().map(str::to_string)
}
