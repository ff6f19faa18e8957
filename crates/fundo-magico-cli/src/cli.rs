//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::Parser;

/// Turn a color description into a CSS background and its preview markup.
#[derive(Debug, Parser)]
#[command(name = "fundo", version)]
pub struct Args {
    /// Description such as "azul e amarelo" or a raw gradient. Read from stdin
    /// when omitted.
    pub text: Option<String>,

    /// Path to a TOML config file with extra color names and template settings.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write the markup to this file, replacing its contents.
    #[arg(long = "html", value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Write the style sheet to this file, replacing its contents.
    #[arg(long = "css", value_name = "PATH")]
    pub css: Option<PathBuf>,

    /// Print the result as a JSON object instead of plain text.
    #[arg(long = "json")]
    pub json: bool,
}
