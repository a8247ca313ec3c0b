//! Remote fact provider specs.
//!
//! A provider is just an endpoint and a rule that pulls display text out of
//! its JSON body. The resolver evaluates every spec the same way.

use serde_json::Value;
use std::fmt;

/// Extraction rule: maps a provider's JSON body to fact text.
pub type ExtractFn = fn(&Value) -> Option<String>;

/// Static description of one remote fact provider.
#[derive(Clone, Copy)]
pub struct ProviderSpec {
    /// Stable identifier (e.g. `catfact`).
    pub id: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    /// URL requested with a plain GET.
    pub endpoint: &'static str,
    /// Extraction rule for the response body.
    pub extract: ExtractFn,
}

impl ProviderSpec {
    /// Creates a new provider spec.
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        endpoint: &'static str,
        extract: ExtractFn,
    ) -> Self {
        Self {
            id,
            display_name,
            endpoint,
            extract,
        }
    }

    /// Applies the extraction rule.
    ///
    /// Whitespace-only or empty text counts as absent.
    pub fn extract_text(&self, body: &Value) -> Option<String> {
        (self.extract)(body)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

impl fmt::Debug for ProviderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSpec")
            .field("id", &self.id)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
