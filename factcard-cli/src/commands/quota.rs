//! Quota command - today's count.

use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the quota command.
#[derive(Args)]
pub struct QuotaArgs {
    #[command(subcommand)]
    pub action: Option<QuotaAction>,
}

/// Quota subcommands.
#[derive(Subcommand)]
pub enum QuotaAction {
    /// Show today's count (default).
    Show,

    /// Clear today's count.
    Reset,
}

/// Runs the quota command.
pub async fn run(args: &QuotaArgs, cli: &Cli) -> Result<()> {
    let settings = super::load_settings(cli).await?;
    let tracker = super::quota_tracker(cli, &settings);

    if matches!(args.action, Some(QuotaAction::Reset)) {
        tracker.reset().await?;
        info!(path = %super::quota_path(cli).display(), "Quota reset");
        if !cli.quiet && cli.format == OutputFormat::Text {
            println!("Quota reset");
        }
    }

    let status = tracker.status().await?;
    match cli.format {
        OutputFormat::Text => {
            println!("{}", TextFormatter::new(!cli.no_color).format_quota(&status));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format_quota(&status)?);
        }
    }

    Ok(())
}
