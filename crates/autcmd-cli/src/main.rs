//! autcmd CLI
//!
//! Prints the argument tokens for an automata-tool request. The tool itself
//! is never started.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use autcmd_core::logging_facility::{self, Profile};
use autcmd_core::ToolConfig;

mod commands;
mod output;

use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "autcmd")]
#[command(about = "Render automata-tool requests as command-line tokens", long_about = None)]
struct Cli {
    /// Tool configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// How to print the tokens
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines, global = true)]
    format: OutputFormat,

    /// Prepend the configured program name
    #[arg(long, global = true)]
    with_program: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a request described by flags
    Render(commands::render::RenderArgs),
    /// Render a request read from a JSON file
    Json(commands::json::JsonArgs),
    /// Render a two-operand request without the encoding pair
    Pair(commands::pair::PairArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::default(),
    };
    if let Some(profile) = logging_profile(&config) {
        logging_facility::init(profile);
    }

    let tokens = match cli.command {
        Commands::Render(args) => commands::render::execute(args)?,
        Commands::Json(args) => commands::json::execute(args)?,
        Commands::Pair(args) => commands::pair::execute(args)?,
    };

    let tokens: Vec<String> = if cli.with_program {
        std::iter::once(config.tool.program.clone())
            .chain(tokens)
            .collect()
    } else {
        tokens
    };

    print!("{}", output::render(&tokens, cli.format)?);
    Ok(())
}

/// Logging stays off unless the config names a profile or `RUST_LOG` is set,
/// so stderr only carries errors
fn logging_profile(config: &ToolConfig) -> Option<Profile> {
    config
        .logging
        .profile
        .or_else(|| std::env::var_os("RUST_LOG").map(|_| Profile::default()))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
