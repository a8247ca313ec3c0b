//! Show command - one "load new fact" invocation.

use std::io::{stderr, stdout};

use anyhow::Result;
use factcard_widget::{CardRecorder, FactWidget, LoadOutcome};

use crate::output::{JsonFormatter, TerminalPresenter, TextFormatter};
use crate::{Cli, ExitCode, OutputFormat};

/// Runs the show command.
pub async fn run(cli: &Cli) -> Result<ExitCode> {
    let mut widget = super::build_widget(cli).await?;
    let outcome = load_and_print(&mut widget, cli).await?;

    Ok(if outcome.is_gated() {
        ExitCode::QuotaReached
    } else {
        ExitCode::Success
    })
}

/// Runs one invocation and prints it in the selected format.
pub async fn load_and_print(widget: &mut FactWidget, cli: &Cli) -> Result<LoadOutcome> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            let mut presenter =
                TerminalPresenter::new(stdout(), formatter.clone()).with_details(!cli.quiet);
            if !cli.quiet {
                let label = widget.policy().labels.loading.clone();
                presenter = presenter.with_loading_indicator(label, stderr());
            }

            let outcome = widget.load_new_fact(&mut presenter).await;
            presenter.finish()?;

            if cli.verbose && !outcome.attempts().is_empty() {
                println!("{}", formatter.format_attempts(outcome.attempts()));
            }
            Ok(outcome)
        }
        OutputFormat::Json => {
            let mut presenter = CardRecorder::new();
            let outcome = widget.load_new_fact(&mut presenter).await;
            println!("{}", JsonFormatter::new(cli.pretty).format_outcome(&outcome)?);
            Ok(outcome)
        }
    }
}
