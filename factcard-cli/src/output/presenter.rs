//! Terminal presenter.
//!
//! Prints slots once they are revealed, so the output order matches what a
//! graphical widget would show.

use std::io::{self, Write};

use factcard_core::{BackgroundOpacity, CardKind, Presenter};

use super::TextFormatter;

/// Loading label and where it is written.
struct LoadingIndicator {
    label: String,
    out: Box<dyn Write + Send>,
}

/// Renders presenter calls as text on a writer.
pub struct TerminalPresenter<W: Write + Send> {
    out: W,
    formatter: TextFormatter,
    loading: Option<LoadingIndicator>,
    details: bool,
    slots: Option<(CardKind, String, String)>,
    background: Option<(String, BackgroundOpacity)>,
    revealed: bool,
    error: Option<io::Error>,
}

impl<W: Write + Send> TerminalPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, formatter: TextFormatter) -> Self {
        Self {
            out,
            formatter,
            loading: None,
            details: true,
            slots: None,
            background: None,
            revealed: false,
            error: None,
        }
    }

    /// Writes `label` to `status` whenever loading starts.
    pub fn with_loading_indicator(
        mut self,
        label: impl Into<String>,
        status: impl Write + Send + 'static,
    ) -> Self {
        self.loading = Some(LoadingIndicator {
            label: label.into(),
            out: Box::new(status),
        });
        self
    }

    /// Prints the background line.
    pub fn with_details(mut self, enabled: bool) -> Self {
        self.details = enabled;
        self
    }

    /// Flushes output and reports the first write error, if any.
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()
    }

    /// Returns the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}") {
            self.error = Some(e);
        }
    }

    fn write_background(&mut self) {
        if !self.details {
            return;
        }
        if let Some((url, opacity)) = self.background.take() {
            let line = self.formatter.format_background(&url, opacity);
            self.write_line(&line);
        }
    }
}

impl<W: Write + Send> Presenter for TerminalPresenter<W> {
    fn set_loading(&mut self, loading: bool) {
        if !loading {
            return;
        }
        if let Some(indicator) = self.loading.as_mut() {
            // Status output is best effort.
            let _ = writeln!(indicator.out, "{}", indicator.label);
        }
    }

    fn set_trigger_enabled(&mut self, _enabled: bool) {}

    fn show_text(&mut self, kind: CardKind, primary: &str, secondary: &str) {
        self.slots = Some((kind, primary.to_string(), secondary.to_string()));
        self.revealed = false;
    }

    fn show_limit_reached(&mut self, primary: &str, secondary: &str) {
        let text = self
            .formatter
            .format_slots(CardKind::LimitReached, primary, secondary);
        self.write_line(&text);
    }

    fn set_background(&mut self, url: &str, opacity: BackgroundOpacity) {
        self.background = Some((url.to_string(), opacity));
        if self.revealed {
            self.write_background();
        }
    }

    fn reveal(&mut self) {
        self.revealed = true;
        if let Some((kind, primary, secondary)) = self.slots.take() {
            let text = self.formatter.format_slots(kind, &primary, &secondary);
            self.write_line(&text);
        }
        self.write_background();
    }
}
