//! autcmd Core - typed automata-tool requests rendered as argument tokens
//!
//! This crate turns a structured request for an external automata tool into
//! the flat list of command-line tokens that tool expects:
//! - Closed model of encodings, operations, directions and orders
//! - Catalogs mapping every variant to its canonical token (and back)
//! - The command serializer (`-r <enc> <op> [-o <opt>] <operands>`)
//! - Error and logging facilities shared with the CLI
//! - Tool configuration loaded from TOML
//!
//! Nothing here spawns a process or touches the operands.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod serializer;

// Re-export commonly used types
pub use config::ToolConfig;
pub use errors::{AutCmdError, ExError, ExErrorKind, Result};
pub use model::{Command, Direction, Encoding, Operation, Options, OptionsKind, Order};
pub use serializer::{serialize_command, serialize_command_with_options};
