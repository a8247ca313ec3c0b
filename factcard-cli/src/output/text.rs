//! Text output formatting with colors.

use factcard_core::{BackgroundOpacity, CardKind, ProviderSpec};
use factcard_fetch::FactAttempt;
use factcard_store::{QuotaStatus, Settings};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats the two text slots.
    pub fn format_slots(&self, kind: CardKind, primary: &str, secondary: &str) -> String {
        let primary = match kind {
            CardKind::LimitReached => self.yellow(primary),
            CardKind::Fetched => self.bold(primary),
            CardKind::Local => self.cyan(primary),
        };
        format!("{primary}\n{}", self.dim(secondary))
    }

    /// Formats the background line.
    pub fn format_background(&self, url: &str, opacity: BackgroundOpacity) -> String {
        let state = match opacity {
            BackgroundOpacity::Full => self.green("loaded"),
            BackgroundOpacity::Dimmed => self.dim("dimmed"),
        };
        format!("{} {} ({state})", self.dim("Background:"), self.cyan(url))
    }

    /// Formats the quota status.
    pub fn format_quota(&self, status: &QuotaStatus) -> String {
        let remaining = status.remaining();
        let left = format!("{remaining} left");
        let left = if status.is_exhausted() {
            self.red(&left)
        } else if remaining <= 2 {
            self.yellow(&left)
        } else {
            self.green(&left)
        };

        format!(
            "{} {}/{} used, {left}",
            self.bold(&format!("Today ({}):", status.day)),
            status.count,
            status.limit
        )
    }

    /// Formats the provider list.
    pub fn format_sources(&self, sources: &[(&ProviderSpec, bool)]) -> String {
        let mut lines = vec![self.bold("Fact providers (priority order)"), "─".repeat(40)];

        for (i, (spec, enabled)) in sources.iter().enumerate() {
            let status = if *enabled {
                self.green("✓")
            } else {
                self.red("✗ disabled")
            };
            lines.push(format!("{}. {:<14} {status}", i + 1, spec.id));
            lines.push(format!("   {}", self.dim(spec.endpoint)));
        }

        lines.join("\n")
    }

    /// Formats the resolver's attempt ledger.
    pub fn format_attempts(&self, attempts: &[FactAttempt]) -> String {
        attempts
            .iter()
            .map(|a| {
                let ms = a.duration.as_millis();
                if a.success {
                    format!("  {} {} ({ms}ms)", self.green("✓"), a.source_id)
                } else {
                    let error = a.error.as_deref().unwrap_or("failed");
                    format!("  {} {} ({ms}ms): {}", self.red("✗"), a.source_id, self.dim(error))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Formats settings.
    pub fn format_settings(&self, settings: &Settings) -> String {
        let primary = if settings.display.primary_is_translated {
            "translated"
        } else {
            "original"
        };
        let disabled = if settings.disabled_sources.is_empty() {
            "none".to_string()
        } else {
            settings.disabled_sources.join(", ")
        };

        [
            self.bold("FactCard Configuration"),
            "─".repeat(40),
            format!("Daily limit:      {}", settings.daily_limit),
            format!("Primary slot:     {primary}"),
            format!("Reveal:           {}", settings.reveal_strategy),
            format!("Target language:  {}", settings.target_language),
            format!(
                "Timeouts:         provider {}ms, pipeline {}ms, image {}ms",
                settings.timeouts.per_provider_ms,
                settings.timeouts.pipeline_ms,
                settings.timeouts.image_reveal_ms
            ),
            format!(
                "Image:            {}x{} {}",
                settings.image.width, settings.image.height, settings.image.topic
            ),
            format!("Disabled sources: {disabled}"),
            format!("Log level:        {}", settings.log_level),
        ]
        .join("\n")
    }

    // ========================================================================
    // Color helpers
    // ========================================================================

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}
