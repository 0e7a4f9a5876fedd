mod cli;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use daterange_core::{
    Config, DateRange,
    parse_input::{ParseOptions, resolve_date},
    render::unescape_separator,
};
use render::{RenderOptions, Renderer};
use std::io::{self, ErrorKind, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.use_color(),
        ..Default::default()
    }));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %format!("{e:#}"), "run failed");
            renderer.print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let range = build_range(&cli, &config)?;

    let separator = match cli.separator.as_deref() {
        Some(raw) => unescape_separator(raw),
        None => config.separator,
    };
    let renderer = Renderer::new(Some(RenderOptions {
        separator,
        use_color: cli.color.use_color(),
        interactive: io::stderr().is_terminal(),
    }));

    if range.is_empty() {
        renderer.print_info(&format!("{} is after {}, nothing to print.", cli.start, cli.end));
    }

    let mut out = io::stdout().lock();
    if cli.count {
        renderer.write_count(&mut out, range.len())?;
    } else if cli.reverse {
        renderer.write_dates(&mut out, range.rev())?;
    } else {
        renderer.write_dates(&mut out, range)?;
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config from --config");
            Config::load_from(path)
        }
        None => {
            tracing::debug!("loading config from default locations");
            Ok(Config::load())
        }
    }
}

fn build_range(cli: &Cli, config: &Config) -> Result<DateRange> {
    let opts = ParseOptions {
        reference_date: Some(config.reference_date),
    };
    let start = resolve_date(&cli.start, Some(opts)).context("invalid start date")?;
    let end = resolve_date(&cli.end, Some(opts)).context("invalid end date")?;

    let range = DateRange::from_dates(start, end);
    tracing::debug!(%start, %end, days = range.len(), "resolved range bounds");
    Ok(range)
}

/// `daterange 19000101 99991231 | head` closes stdout early; that is not a failure.
fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|io| io.kind() == ErrorKind::BrokenPipe)
}
