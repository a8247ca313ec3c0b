//! Display policy.
//!
//! One coherent configuration for slot order, reveal ordering, the three
//! timeouts, and the fixed user-facing strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// ============================================================================
// Display Order
// ============================================================================

/// Which text goes into the primary (large) slot on the success path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOrder {
    /// When true the translated text is primary and the original is secondary.
    pub primary_is_translated: bool,
}

impl DisplayOrder {
    /// Translated text first.
    pub const TRANSLATED_FIRST: Self = Self {
        primary_is_translated: true,
    };

    /// Original text first.
    pub const ORIGINAL_FIRST: Self = Self {
        primary_is_translated: false,
    };

    /// Arranges a translated/original pair into `(primary, secondary)`.
    pub fn arrange(self, translated: String, original: String) -> (String, String) {
        if self.primary_is_translated {
            (translated, original)
        } else {
            (original, translated)
        }
    }
}

impl Default for DisplayOrder {
    fn default() -> Self {
        Self::TRANSLATED_FIRST
    }
}

// ============================================================================
// Reveal Strategy
// ============================================================================

/// How the text reveal is reconciled with the background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RevealStrategy {
    /// Wait (bounded) for the image, then reveal text and image together.
    #[default]
    WaitThenShow,
    /// Reveal text immediately, then apply the image once it settles (bounded).
    ShowThenReconcile,
}

impl fmt::Display for RevealStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealStrategy::WaitThenShow => write!(f, "wait then show"),
            RevealStrategy::ShowThenReconcile => write!(f, "show then reconcile"),
        }
    }
}

// ============================================================================
// Timeouts
// ============================================================================

/// The three deadlines applied by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Deadline for a single provider request, and for the translation.
    pub per_provider: Duration,
    /// Deadline for fact resolution across all providers.
    pub pipeline: Duration,
    /// How long the reveal waits for the background image.
    pub image_reveal: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            per_provider: Duration::from_millis(3000),
            pipeline: Duration::from_millis(8000),
            image_reveal: Duration::from_millis(1000),
        }
    }
}

// ============================================================================
// Labels
// ============================================================================

/// Fixed user-facing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayLabels {
    /// Shown instead of an empty translation.
    pub translation_unavailable: String,
    /// Secondary slot text when showing a local fact.
    pub fallback_label: String,
    /// Primary slot text once the daily quota is used up.
    pub limit_primary: String,
    /// Secondary slot text once the daily quota is used up.
    pub limit_secondary: String,
    /// Loading indicator text.
    pub loading: String,
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self {
            translation_unavailable: "Traducción no disponible".to_string(),
            fallback_label: "— dato local —".to_string(),
            limit_primary: "Vuelve mañana por más datos gatunos 🐱".to_string(),
            limit_secondary: "Come back tomorrow for more cat facts 🐱".to_string(),
            loading: "Cargando…".to_string(),
        }
    }
}

// ============================================================================
// Display Policy
// ============================================================================

/// Complete display policy for one widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayPolicy {
    /// Slot order on the success path.
    pub order: DisplayOrder,
    /// Text/image reveal ordering.
    pub reveal: RevealStrategy,
    /// Pipeline deadlines.
    pub timeouts: Timeouts,
    /// User-facing strings.
    pub labels: DisplayLabels,
}

impl DisplayPolicy {
    /// Sets the slot order.
    pub fn with_order(mut self, order: DisplayOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the reveal strategy.
    pub fn with_reveal(mut self, reveal: RevealStrategy) -> Self {
        self.reveal = reveal;
        self
    }

    /// Sets the timeouts.
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrange_translated_first() {
        let (primary, secondary) =
            DisplayOrder::TRANSLATED_FIRST.arrange("Hola".into(), "Hello".into());
        assert_eq!(primary, "Hola");
        assert_eq!(secondary, "Hello");
    }

    #[test]
    fn test_arrange_original_first() {
        let (primary, secondary) =
            DisplayOrder::ORIGINAL_FIRST.arrange("Hola".into(), "Hello".into());
        assert_eq!(primary, "Hello");
        assert_eq!(secondary, "Hola");
    }

    #[test]
    fn test_default_timeouts() {
        let t = Timeouts::default();
        assert_eq!(t.per_provider, Duration::from_secs(3));
        assert_eq!(t.pipeline, Duration::from_secs(8));
        assert_eq!(t.image_reveal, Duration::from_secs(1));
    }
}
