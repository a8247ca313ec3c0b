//! Watch command - keep pulling facts until the daily limit.

use anyhow::Result;
use clap::Args;
use tokio::time::{Duration, interval};
use tracing::info;

use crate::{Cli, ExitCode, OutputFormat};

/// Arguments for watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Seconds between facts.
    #[arg(long, short, default_value = "30")]
    pub interval: u64,

    /// Minimum interval to use.
    #[arg(long, default_value = "5")]
    pub min_interval: u64,
}

/// Runs the watch command.
pub async fn run(args: &WatchArgs, cli: &Cli) -> Result<ExitCode> {
    let every = args.interval.max(args.min_interval);
    info!(interval = every, "Starting watch mode");

    let mut widget = super::build_widget(cli).await?;
    let mut ticker = interval(Duration::from_secs(every));

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                return Ok(ExitCode::Success);
            }
        }

        if cli.format == OutputFormat::Text && !cli.quiet {
            println!(
                "── {} ─────────────────────────",
                chrono::Local::now().format("%H:%M:%S")
            );
        }

        let outcome = super::show::load_and_print(&mut widget, cli).await?;
        if outcome.is_gated() {
            return Ok(ExitCode::QuotaReached);
        }

        if cli.format == OutputFormat::Text && !cli.quiet {
            println!();
        }
    }
}
