//! The rendered card.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Background opacity after the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundOpacity {
    /// Image loaded in time.
    Full,
    /// Image failed or timed out.
    Dimmed,
}

impl BackgroundOpacity {
    /// Numeric opacity for presentation layers.
    pub fn value(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::Dimmed => 0.5,
        }
    }
}

/// Background image state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Randomized image URL.
    pub url: String,
    /// Final opacity.
    pub opacity: BackgroundOpacity,
}

/// What kind of content the card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// A remote fact with its translation.
    Fetched,
    /// A local fallback fact.
    Local,
    /// The daily limit message.
    LimitReached,
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Fetched => write!(f, "fetched"),
            CardKind::Local => write!(f, "local"),
            CardKind::LimitReached => write!(f, "limit reached"),
        }
    }
}

/// A finished card: two text slots plus background state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCard {
    /// Content kind.
    pub kind: CardKind,
    /// Large text.
    pub primary: String,
    /// Small text.
    pub secondary: String,
    /// Provider id for fetched cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Background, if an image load was started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
}

impl FactCard {
    /// Creates a card without background.
    pub fn new(kind: CardKind, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            kind,
            primary: primary.into(),
            secondary: secondary.into(),
            source: None,
            background: None,
        }
    }
}
