//! Command serializer
//!
//! Turns a [`Command`] into the argument tokens of the external tool, in a
//! fixed order:
//!
//! ```text
//! "-r" <encoding> <operation> ["-o" <prefix><value>] <operand>*
//! ```
//!
//! Every element is exactly one process argument; nothing is split, quoted
//! or joined. The functions are pure apart from debug-level log events.

use crate::catalog;
use crate::errors::Result;
use crate::model::{Command, Encoding, Operation, Options};
use crate::{log_op_end, log_op_error, log_op_start};

pub const ENCODING_PARAM: &str = "-r";
pub const OPTION_PARAM: &str = "-o";

/// `["-r", <encoding token>]`
pub fn serialize_encoding(encoding: Encoding) -> Vec<String> {
    vec![
        ENCODING_PARAM.to_string(),
        catalog::encoding_token(encoding).to_string(),
    ]
}

/// `[<operation token>]`
pub fn serialize_operation(operation: Operation) -> Vec<String> {
    vec![catalog::operation_token(operation).to_string()]
}

/// `["-o", <option token>]`, or nothing when the operation takes no options
///
/// # Errors
///
/// `MissingOptions` / `InvalidOptionsShape` when `options` does not fit
/// `operation` (see [`catalog::option_token`]).
pub fn serialize_options(
    operation: Operation,
    encoding: Option<Encoding>,
    options: Option<&Options>,
) -> Result<Vec<String>> {
    let tokens = match catalog::option_token(operation, encoding, options)? {
        Some(token) => vec![OPTION_PARAM.to_string(), token],
        None => Vec::new(),
    };
    Ok(tokens)
}

/// Operands pass through untouched and in order
pub fn serialize_operands<I, S>(operands: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    operands
        .into_iter()
        .map(|operand| operand.as_ref().to_string())
        .collect()
}

/// Serialize a full command
///
/// # Errors
///
/// `MissingOptions` if the operation needs options and has none;
/// `InvalidOptionsShape` if the options are of the wrong kind or the
/// operation takes none.
///
/// # Example
///
/// ```
/// use autcmd_core::{serialize_command, Command, Direction, Encoding, Operation};
///
/// let cmd = Command::new(Encoding::ExplicitFa, Operation::Simulation, ["a.fa", "b.fa"])
///     .with_options(Direction::Forward);
/// assert_eq!(
///     serialize_command(&cmd).unwrap(),
///     ["-r", "EFA", "SIM", "-o", "dir=FWD", "a.fa", "b.fa"]
/// );
/// ```
pub fn serialize_command(command: &Command) -> Result<Vec<String>> {
    log_op_start!(
        "serialize_command",
        encoding = catalog::encoding_token(command.encoding),
        operation = catalog::operation_token(command.operation),
        operand_count = command.operands.len() as u64
    );
    let start = std::time::Instant::now();

    let tokens = serialize_command_impl(command).map_err(|e| {
        log_op_error!(
            "serialize_command",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "serialize_command",
        duration_ms = start.elapsed().as_millis() as u64,
        token_count = tokens.len() as u64
    );

    Ok(tokens)
}

fn serialize_command_impl(command: &Command) -> Result<Vec<String>> {
    let mut tokens = serialize_encoding(command.encoding);
    tokens.extend(serialize_operation(command.operation));
    tokens.extend(serialize_options(
        command.operation,
        Some(command.encoding),
        command.options.as_ref(),
    )?);
    tokens.extend(serialize_operands(&command.operands));
    Ok(tokens)
}

/// Serialize a binary request without the `-r` pair
///
/// For call sites where the encoding is implicit. Direction values come from
/// the default table, since the FA-specific one is keyed by encoding.
///
/// # Errors
///
/// Same as [`serialize_command`].
pub fn serialize_command_with_options(
    operation: Operation,
    options: Option<&Options>,
    lhs: &str,
    rhs: &str,
) -> Result<Vec<String>> {
    log_op_start!(
        "serialize_command_with_options",
        operation = catalog::operation_token(operation)
    );
    let start = std::time::Instant::now();

    let tokens = serialize_command_with_options_impl(operation, options, lhs, rhs).map_err(|e| {
        log_op_error!(
            "serialize_command_with_options",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "serialize_command_with_options",
        duration_ms = start.elapsed().as_millis() as u64,
        token_count = tokens.len() as u64
    );

    Ok(tokens)
}

fn serialize_command_with_options_impl(
    operation: Operation,
    options: Option<&Options>,
    lhs: &str,
    rhs: &str,
) -> Result<Vec<String>> {
    let mut tokens = serialize_operation(operation);
    tokens.extend(serialize_options(operation, None, options)?);
    tokens.extend(serialize_operands([lhs, rhs]));
    Ok(tokens)
}
