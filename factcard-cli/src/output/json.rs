//! JSON output formatting.

use anyhow::Result;
use factcard_core::{FactCard, ProviderSpec};
use factcard_fetch::FactAttempt;
use factcard_store::QuotaStatus;
use factcard_widget::LoadOutcome;
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for one invocation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeOutput<'a> {
    pub gated: bool,
    pub card: &'a FactCard,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attempts: Vec<AttemptOutput<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// One provider attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptOutput<'a> {
    pub source: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    pub duration_ms: u64,
}

/// Quota status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaOutput<'a> {
    pub day: &'a str,
    pub count: u32,
    pub limit: u32,
    pub remaining: u32,
}

/// One provider in the registry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceOutput<'a> {
    pub priority: usize,
    pub id: &'a str,
    pub display_name: &'a str,
    pub endpoint: &'a str,
    pub enabled: bool,
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl<'a> From<&'a FactAttempt> for AttemptOutput<'a> {
    fn from(a: &'a FactAttempt) -> Self {
        Self {
            source: &a.source_id,
            success: a.success,
            error: a.error.as_deref(),
            duration_ms: millis(a.duration),
        }
    }
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats one invocation.
    pub fn format_outcome(&self, outcome: &LoadOutcome) -> Result<String> {
        let output = match outcome {
            LoadOutcome::Gated { card } => OutcomeOutput {
                gated: true,
                card,
                attempts: Vec::new(),
                count: None,
                duration_ms: None,
            },
            LoadOutcome::Shown {
                card,
                attempts,
                count,
                duration,
            } => OutcomeOutput {
                gated: false,
                card,
                attempts: attempts.iter().map(AttemptOutput::from).collect(),
                count: *count,
                duration_ms: Some(millis(*duration)),
            },
        };

        self.format(&output)
    }

    /// Formats the quota status.
    pub fn format_quota(&self, status: &QuotaStatus) -> Result<String> {
        self.format(&QuotaOutput {
            day: &status.day,
            count: status.count,
            limit: status.limit,
            remaining: status.remaining(),
        })
    }

    /// Formats the provider list.
    pub fn format_sources(&self, sources: &[(&ProviderSpec, bool)]) -> Result<String> {
        let outputs: Vec<SourceOutput<'_>> = sources
            .iter()
            .enumerate()
            .map(|(i, (spec, enabled))| SourceOutput {
                priority: i + 1,
                id: spec.id,
                display_name: spec.display_name,
                endpoint: spec.endpoint,
                enabled: *enabled,
            })
            .collect();

        self.format(&outputs)
    }
}
