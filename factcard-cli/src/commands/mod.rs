//! CLI command implementations.

pub mod config;
pub mod quota;
pub mod show;
pub mod sources;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use factcard_core::RevealStrategy;
use factcard_store::{
    JsonFileStore, QuotaTracker, Settings, SettingsStore, default_quota_path,
    default_settings_path,
};
use factcard_widget::FactWidget;

use crate::{Cli, PrimarySlot, RevealArg};

/// Settings file in effect.
pub fn settings_path(cli: &Cli) -> PathBuf {
    cli.settings_file.clone().unwrap_or_else(default_settings_path)
}

/// Quota state file in effect.
pub fn quota_path(cli: &Cli) -> PathBuf {
    cli.state_file.clone().unwrap_or_else(default_quota_path)
}

/// Opens the settings store.
pub async fn open_settings(cli: &Cli) -> Result<SettingsStore> {
    Ok(SettingsStore::load(settings_path(cli)).await?)
}

/// Loads settings and applies command-line overrides.
pub async fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = open_settings(cli).await?.get().await;
    apply_overrides(cli, &mut settings);
    Ok(settings)
}

/// Applies per-run flags on top of persisted settings.
pub fn apply_overrides(cli: &Cli, settings: &mut Settings) {
    if let Some(limit) = cli.limit {
        settings.daily_limit = limit;
    }
    if let Some(primary) = cli.primary {
        settings.display.primary_is_translated = primary == PrimarySlot::Translated;
    }
    if let Some(reveal) = cli.reveal {
        settings.reveal_strategy = match reveal {
            RevealArg::Wait => RevealStrategy::WaitThenShow,
            RevealArg::Reconcile => RevealStrategy::ShowThenReconcile,
        };
    }
}

/// Creates the quota tracker over the state file.
pub fn quota_tracker(cli: &Cli, settings: &Settings) -> QuotaTracker {
    let store = Arc::new(JsonFileStore::new(quota_path(cli)));
    QuotaTracker::new(store, settings.daily_limit)
}

/// Assembles a widget from settings, overrides and the registry.
pub async fn build_widget(cli: &Cli) -> Result<FactWidget> {
    let settings = load_settings(cli).await?;
    let quota = quota_tracker(cli, &settings);
    Ok(FactWidget::from_settings(&settings, quota)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "factcard",
            "--limit",
            "3",
            "--primary",
            "original",
            "--reveal",
            "reconcile",
        ]);
        let mut settings = Settings::default();
        apply_overrides(&cli, &mut settings);

        assert_eq!(settings.daily_limit, 3);
        assert!(!settings.display.primary_is_translated);
        assert_eq!(settings.reveal_strategy, RevealStrategy::ShowThenReconcile);
    }

    #[test]
    fn test_no_flags_keep_settings() {
        let cli = Cli::parse_from(["factcard", "show"]);
        let mut settings = Settings {
            daily_limit: 7,
            ..Settings::default()
        };
        apply_overrides(&cli, &mut settings);
        assert_eq!(settings, Settings {
            daily_limit: 7,
            ..Settings::default()
        });
    }

    #[test]
    fn test_state_file_flag() {
        let cli = Cli::parse_from(["factcard", "--state-file", "/tmp/q.json", "quota"]);
        assert_eq!(quota_path(&cli), PathBuf::from("/tmp/q.json"));
    }
}
