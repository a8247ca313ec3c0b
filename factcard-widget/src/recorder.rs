//! A presenter that records what it was told.
//!
//! Useful for tests and for front-ends that render once at the end.

use factcard_core::{BackgroundOpacity, CardKind, Presenter};
use serde::Serialize;

/// One call made on a [`Presenter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PresenterEvent {
    /// `set_loading`.
    Loading {
        /// New value.
        loading: bool,
    },
    /// `set_trigger_enabled`.
    Trigger {
        /// New value.
        enabled: bool,
    },
    /// `show_text`.
    Text {
        /// Fetched or local.
        kind: CardKind,
        /// Primary slot.
        primary: String,
        /// Secondary slot.
        secondary: String,
    },
    /// `show_limit_reached`.
    LimitReached {
        /// Primary slot.
        primary: String,
        /// Secondary slot.
        secondary: String,
    },
    /// `set_background`.
    Background {
        /// Image URL.
        url: String,
        /// Final opacity.
        opacity: BackgroundOpacity,
    },
    /// `reveal`.
    Reveal,
}

/// Records every presenter call and keeps the resulting screen state.
#[derive(Debug, Clone, Default)]
pub struct CardRecorder {
    events: Vec<PresenterEvent>,
    kind: Option<CardKind>,
    primary: String,
    secondary: String,
    loading: bool,
    trigger_enabled: bool,
    revealed: bool,
    background: Option<(String, BackgroundOpacity)>,
}

impl CardRecorder {
    /// Creates an empty recorder with the trigger enabled.
    pub fn new() -> Self {
        Self {
            trigger_enabled: true,
            ..Self::default()
        }
    }

    /// All calls so far, in order.
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Kind of the text on screen, if any.
    pub fn kind(&self) -> Option<CardKind> {
        self.kind
    }

    /// Primary slot text.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Secondary slot text.
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Whether the loading indicator is showing.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the trigger is enabled.
    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    /// Whether text has been revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Current background, if any.
    pub fn background(&self) -> Option<(&str, BackgroundOpacity)> {
        self.background
            .as_ref()
            .map(|(url, opacity)| (url.as_str(), *opacity))
    }

    /// Index of the first event matching `pred`.
    pub fn position(&self, pred: impl Fn(&PresenterEvent) -> bool) -> Option<usize> {
        self.events.iter().position(pred)
    }
}

impl Presenter for CardRecorder {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.events.push(PresenterEvent::Loading { loading });
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
        self.events.push(PresenterEvent::Trigger { enabled });
    }

    fn show_text(&mut self, kind: CardKind, primary: &str, secondary: &str) {
        self.kind = Some(kind);
        self.primary = primary.to_string();
        self.secondary = secondary.to_string();
        self.revealed = false;
        self.events.push(PresenterEvent::Text {
            kind,
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        });
    }

    fn show_limit_reached(&mut self, primary: &str, secondary: &str) {
        self.kind = Some(CardKind::LimitReached);
        self.primary = primary.to_string();
        self.secondary = secondary.to_string();
        self.revealed = true;
        self.events.push(PresenterEvent::LimitReached {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        });
    }

    fn set_background(&mut self, url: &str, opacity: BackgroundOpacity) {
        self.background = Some((url.to_string(), opacity));
        self.events.push(PresenterEvent::Background {
            url: url.to_string(),
            opacity,
        });
    }

    fn reveal(&mut self) {
        self.revealed = true;
        self.events.push(PresenterEvent::Reveal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_state() {
        let mut recorder = CardRecorder::new();
        recorder.set_loading(true);
        recorder.show_text(CardKind::Local, "Hola", "Hello");
        assert!(!recorder.is_revealed());
        recorder.reveal();
        recorder.set_background("https://loremflickr.com/1/1/cat?lock=1", BackgroundOpacity::Dimmed);

        assert_eq!(recorder.primary(), "Hola");
        assert_eq!(recorder.kind(), Some(CardKind::Local));
        assert!(recorder.is_revealed());
        assert_eq!(
            recorder.background().map(|(_, o)| o),
            Some(BackgroundOpacity::Dimmed)
        );
        assert_eq!(recorder.events().len(), 4);
        assert_eq!(
            recorder.position(|e| matches!(e, PresenterEvent::Reveal)),
            Some(2)
        );
    }
}
