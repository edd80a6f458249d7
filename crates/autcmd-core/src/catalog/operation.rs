//! Operation catalog

use super::lookup;
use crate::errors::{AutCmdError, Result};
use crate::model::Operation;

/// Canonical token naming the tool subcommand
pub fn operation_token(operation: Operation) -> &'static str {
    match operation {
        Operation::Load => "LOAD",
        Operation::Witness => "WITNESS",
        Operation::Complement => "CMPL",
        Operation::Union => "UNION",
        Operation::Intersection => "ISECT",
        Operation::Simulation => "SIM",
        Operation::Reduction => "RED",
        Operation::Equivalence => "EQUIV",
        Operation::Inclusion => "INCL",
    }
}

/// Resolve a token or snake_case name to an operation
///
/// # Errors
///
/// `UnknownOperation` if `text` names no operation.
pub fn parse_operation(text: &str) -> Result<Operation> {
    lookup(&Operation::ALL, text, |op| [operation_token(op), op.name()]).ok_or_else(|| {
        AutCmdError::UnknownOperation {
            token: text.to_string(),
        }
    })
}
