//! Fact and translation results.

use serde::{Deserialize, Serialize};

/// Translated text. Empty means "translation unavailable", not an error.
pub type TranslationResult = String;

/// The outcome of fact resolution.
///
/// A result is either text fetched from a remote provider or a fact drawn
/// from the local fallback pool. The fallback variant always carries text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FactResult {
    /// Text extracted from a remote provider.
    Success {
        /// The extracted fact.
        text: String,
        /// Id of the provider that produced it.
        source: String,
    },
    /// Text drawn from the local fallback pool.
    Fallback {
        /// The local fact.
        text: String,
    },
}

impl FactResult {
    /// Creates a success result.
    pub fn success(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self::Success {
            text: text.into(),
            source: source.into(),
        }
    }

    /// Creates a fallback result.
    pub fn fallback(text: impl Into<String>) -> Self {
        Self::Fallback { text: text.into() }
    }

    /// Returns the fact text regardless of origin.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { text, .. } | Self::Fallback { text } => text,
        }
    }

    /// Returns true if the text came from a remote provider.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the provider id for successful results.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            Self::Success { source, .. } => Some(source),
            Self::Fallback { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let result = FactResult::success("Cats sleep a lot.", "catfact");
        assert!(result.is_success());
        assert_eq!(result.text(), "Cats sleep a lot.");
        assert_eq!(result.source_id(), Some("catfact"));
    }

    #[test]
    fn test_fallback_accessors() {
        let result = FactResult::fallback("Los gatos duermen mucho.");
        assert!(!result.is_success());
        assert_eq!(result.text(), "Los gatos duermen mucho.");
        assert_eq!(result.source_id(), None);
    }
}
