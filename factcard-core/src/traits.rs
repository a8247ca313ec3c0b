//! The render boundary.
//!
//! The orchestrator never touches a concrete UI. It hands finished strings,
//! background state and loading/trigger toggles to a [`Presenter`].

use crate::models::{BackgroundOpacity, CardKind};

/// Presentation layer driven by the widget orchestrator.
///
/// Implementations decide styling and animation; the orchestrator only
/// guarantees call order: `set_loading(true)` and `set_trigger_enabled(false)`
/// before any text, `reveal()` after both text slots are assigned, and
/// `set_trigger_enabled(true)` on every non-gated exit.
pub trait Presenter: Send {
    /// Shows or hides the loading indicator.
    fn set_loading(&mut self, loading: bool);

    /// Enables or disables the "new fact" trigger.
    fn set_trigger_enabled(&mut self, enabled: bool);

    /// Assigns both text slots (still hidden until [`Presenter::reveal`]).
    ///
    /// `kind` is [`CardKind::Fetched`] or [`CardKind::Local`].
    fn show_text(&mut self, kind: CardKind, primary: &str, secondary: &str);

    /// Shows the daily-limit message pair. Terminal for the invocation.
    fn show_limit_reached(&mut self, primary: &str, secondary: &str);

    /// Applies the background image with the given opacity.
    fn set_background(&mut self, url: &str, opacity: BackgroundOpacity);

    /// Makes the assigned text visible.
    fn reveal(&mut self);
}
