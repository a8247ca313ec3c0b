//! Sources command - list fact providers.

use anyhow::Result;
use factcard_providers::SourceRegistry;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the sources command.
pub async fn run(cli: &Cli) -> Result<()> {
    let settings = super::load_settings(cli).await?;
    let sources: Vec<_> = SourceRegistry::all()
        .iter()
        .map(|spec| (spec, !settings.is_source_disabled(spec.id)))
        .collect();

    match cli.format {
        OutputFormat::Text => {
            println!("{}", TextFormatter::new(!cli.no_color).format_sources(&sources));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format_sources(&sources)?);
        }
    }

    Ok(())
}
