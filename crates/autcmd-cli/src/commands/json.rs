//! JSON command
//!
//! Usage: autcmd json <FILE>
//!
//! The file holds a serialized `Command`, e.g.
//! `{"encoding":"explicit_fa","operation":"simulation","options":{"direction":"forward"},"operands":["a.fa","b.fa"]}`.
//! `-` reads from stdin.

use clap::Args;
use std::io::Read;
use std::path::PathBuf;

use autcmd_core::{serialize_command, Command};

#[derive(Debug, Args)]
pub struct JsonArgs {
    /// JSON file describing the command (`-` for stdin)
    pub file: PathBuf,
}

/// Execute json command
pub fn execute(args: JsonArgs) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let text = if args.file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.file)?
    };

    let command = Command::from_json(&text)?;
    Ok(serialize_command(&command)?)
}
