//! CLI entry point for fundo.

mod cli;
mod output;

use std::io::{Read, Write};
use std::process::ExitCode;

use clap::Parser;
use fundo_magico::config::Config;
use fundo_magico::{BackgroundParser, ConfigError, Renderer};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::output::OutputError;

/// Exit code when the text produced no background.
const EXIT_NO_BACKGROUND: u8 = 1;

/// Exit code for config and I/O errors.
const EXIT_ERROR: u8 = 2;

/// Errors that stop the CLI before a result can be shown.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// How a run ended when nothing went wrong around the parse itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// A background was produced.
    Produced,
    /// The text was rejected; the placeholder was emitted instead.
    Rejected,
}

fn main() -> ExitCode {
    let args = cli::Args::parse();
    init_tracing();

    let result = run(&args, std::io::stdin().lock(), &mut std::io::stdout().lock());
    if let Err(e) = &result {
        eprintln!("error: {e}");
    }
    ExitCode::from(exit_code(&result))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn exit_code(result: &Result<Outcome, CliError>) -> u8 {
    match result {
        Ok(Outcome::Produced) => 0,
        Ok(Outcome::Rejected) => EXIT_NO_BACKGROUND,
        Err(_) => EXIT_ERROR,
    }
}

/// Load config, parse, render and emit.
///
/// `input` is read only when no text was given on the command line. Plain
/// and JSON results go to `out`; with `--html` or `--css` the files are
/// replaced and nothing is printed unless `--json` asks for it.
fn run(args: &cli::Args, input: impl Read, out: &mut impl Write) -> Result<Outcome, CliError> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let text = match &args.text {
        Some(text) => text.clone(),
        None => std::io::read_to_string(input).map_err(OutputError::Stdin)?,
    };

    let parser = BackgroundParser::new(&config);
    let renderer = Renderer::new(&config.render);

    let result = parser.parse(&text);
    let rendered = match &result {
        Ok(background) => renderer.render(&background.to_literal()),
        Err(error) => {
            tracing::debug!(%error, "no background produced");
            renderer.render_failure(error)
        }
    };

    if let Some(path) = &args.html {
        output::replace_file(path, &rendered.markup)?;
    }
    if let Some(path) = &args.css {
        output::replace_file(path, &rendered.style)?;
    }

    if args.json {
        output::emit(out, &format!("{}\n", output::json_value(&result, &rendered)))?;
    } else if args.html.is_none() && args.css.is_none() {
        output::emit(out, &output::plain(&rendered))?;
    } else if let Err(error) = &result {
        eprintln!("{error}");
    }

    Ok(if result.is_ok() {
        Outcome::Produced
    } else {
        Outcome::Rejected
    })
}
