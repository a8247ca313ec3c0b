// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! FactCard CLI - a random cat fact a day (well, ten).
//!
//! # Examples
//!
//! ```bash
//! # Show one fact (counts toward today's limit)
//! factcard
//!
//! # Original text in the large slot
//! factcard --primary original
//!
//! # JSON output
//! factcard --format json --pretty
//!
//! # A new fact every 20 seconds until the limit is reached
//! factcard watch --interval 20
//!
//! # How many are left today
//! factcard quota
//! ```

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use factcard_store::LogLevel;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{config, quota, show, sources, watch};

// ============================================================================
// CLI Definition
// ============================================================================

/// FactCard CLI - daily-capped random facts.
#[derive(Parser)]
#[command(name = "factcard")]
#[command(about = "Daily-capped random fact card with translation")]
#[command(long_about = r"
FactCard shows a random fact, translated, over a random background image.
Only a fixed number of facts can be shown per day.

Fact providers (tried in order):
  • catfact.ninja (catfact)
  • meowfacts (meowfacts)
  • uselessfacts.jsph.pl (uselessfacts)

When every provider fails, a built-in Spanish fact is shown instead.

Examples:
  factcard                       # One fact
  factcard --primary original    # Original text first
  factcard watch --interval 20   # Keep going until the limit
  factcard quota reset           # Start today's count over
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'show' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Daily limit for this run (overrides settings).
    #[arg(long, global = true)]
    pub limit: Option<u32>,

    /// Which text goes in the large slot (overrides settings).
    #[arg(long, global = true)]
    pub primary: Option<PrimarySlot>,

    /// Text/image reveal ordering (overrides settings).
    #[arg(long, global = true)]
    pub reveal: Option<RevealArg>,

    /// Quota state file (default: data dir).
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Settings file (default: config dir).
    #[arg(long, global = true)]
    pub settings_file: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show one new fact (default if no command specified).
    #[command(visible_alias = "s")]
    Show,

    /// Show a new fact on an interval until the daily limit.
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),

    /// Show or reset today's quota.
    #[command(visible_alias = "q")]
    Quota(quota::QuotaArgs),

    /// List fact providers in priority order.
    Sources,

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// Large-slot choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrimarySlot {
    /// Original fetched text first.
    Original,
    /// Translated text first.
    Translated,
}

/// Reveal strategy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RevealArg {
    /// Wait briefly for the image, then show everything.
    Wait,
    /// Show text at once, apply the image when it arrives.
    Reconcile,
}

/// CLI exit codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Daily limit reached.
    QuotaReached = 5,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, level: LogLevel) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("factcard=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("factcard={level}")))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = commands::load_settings(&cli)
        .await
        .map(|s| s.log_level)
        .unwrap_or_default();
    setup_logging(cli.verbose, cli.quiet, level);

    let result = match &cli.command {
        Some(Commands::Show) | None => show::run(&cli).await,
        Some(Commands::Watch(args)) => watch::run(args, &cli).await,
        Some(Commands::Quota(args)) => quota::run(args, &cli).await.map(|()| ExitCode::Success),
        Some(Commands::Sources) => sources::run(&cli).await.map(|()| ExitCode::Success),
        Some(Commands::Config(args)) => config::run(args, &cli).await.map(|()| ExitCode::Success),
    };

    match result {
        Ok(ExitCode::Success) => Ok(()),
        Ok(code) => std::process::exit(code as i32),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(ExitCode::Error as i32);
        }
    }
}
