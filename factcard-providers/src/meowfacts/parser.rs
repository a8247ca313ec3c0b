//! meowfacts response parser.

use serde_json::Value;

/// Extracts the first entry of the `data` array.
pub fn parse_fact(body: &Value) -> Option<String> {
    body.get("data")?
        .as_array()?
        .first()?
        .as_str()
        .map(str::to_string)
}
