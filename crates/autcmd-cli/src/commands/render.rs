//! Render command
//!
//! Usage: autcmd render --encoding <ENC> <OPERATION> [--direction D | --order O] [OPERANDS...]

use clap::Args;

use autcmd_core::{serialize_command, Command, Encoding, Operation};

use super::OptionArgs;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Automaton encoding (EXPL, EFA, BDD_TD, BDD_BU or their names)
    #[arg(short = 'r', long)]
    pub encoding: Encoding,

    /// Operation to request (SIM, RED, EQUIV, INCL, LOAD, ...)
    pub operation: Operation,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Operands passed through to the tool, in order (use `--` before
    /// operands that start with a hyphen)
    pub operands: Vec<String>,
}

/// Execute render command
pub fn execute(args: RenderArgs) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let command = Command {
        encoding: args.encoding,
        operation: args.operation,
        options: args.options.options(),
        operands: args.operands,
    };
    tracing::debug!(?command, "rendering command from flags");

    Ok(serialize_command(&command)?)
}
