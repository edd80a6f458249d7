//! Pair command
//!
//! Usage: autcmd pair <OPERATION> [--direction D | --order O] <LHS> <RHS>

use clap::Args;

use autcmd_core::{serialize_command_with_options, Operation};

use super::OptionArgs;

#[derive(Debug, Args)]
pub struct PairArgs {
    /// Operation to request
    pub operation: Operation,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Left operand
    pub lhs: String,

    /// Right operand
    pub rhs: String,
}

/// Execute pair command
pub fn execute(args: PairArgs) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let options = args.options.options();
    Ok(serialize_command_with_options(
        args.operation,
        options.as_ref(),
        &args.lhs,
        &args.rhs,
    )?)
}
