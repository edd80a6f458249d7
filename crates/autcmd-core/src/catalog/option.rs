//! Option catalog
//!
//! Per-operation formatting of the value that follows `-o`:
//!
//! | Operation   | Prefix   | Field     | Table                                   |
//! |-------------|----------|-----------|-----------------------------------------|
//! | Simulation  | `dir=`   | Direction | FA table for `ExplicitFa`, else default |
//! | Reduction   | `dir=`   | Direction | default                                 |
//! | Equivalence | `order=` | Order     | order                                   |
//! | Inclusion   | `dir=`   | Order     | order                                   |
//!
//! Inclusion pairs the `dir=` prefix with an order value. That is what the
//! tool front end has always emitted; it is kept as-is until the tool's own
//! argument contract says otherwise.

use super::lookup;
use crate::errors::{AutCmdError, Result};
use crate::model::{Direction, Encoding, Operation, Options, OptionsKind, Order};

pub const DIR_PREFIX: &str = "dir=";
pub const ORDER_PREFIX: &str = "order=";

/// Direction tokens understood for explicit finite automata
pub fn fa_direction_token(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "FWD",
        Direction::Backward => "BWD",
    }
}

/// Direction tokens for every other encoding
pub fn default_direction_token(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "UP",
        Direction::Backward => "DOWN",
    }
}

/// Direction token for `direction` under `encoding`
pub fn direction_token(encoding: Encoding, direction: Direction) -> &'static str {
    if encoding.is_explicit_fa() {
        fa_direction_token(direction)
    } else {
        default_direction_token(direction)
    }
}

pub fn order_token(order: Order) -> &'static str {
    match order {
        Order::Lexicographic => "LEX",
        Order::DepthFirst => "DEPTH",
        Order::BreadthFirst => "BREADTH",
    }
}

/// Resolve a direction from its name or a token of either table
///
/// # Errors
///
/// `UnknownDirection` if nothing matches.
pub fn parse_direction(text: &str) -> Result<Direction> {
    lookup(&Direction::ALL, text, |d| {
        [fa_direction_token(d), default_direction_token(d), d.name()]
    })
    .ok_or_else(|| AutCmdError::UnknownDirection {
        token: text.to_string(),
    })
}

/// # Errors
///
/// `UnknownOrder` if `text` names no order.
pub fn parse_order(text: &str) -> Result<Order> {
    lookup(&Order::ALL, text, |o| [order_token(o), o.name()]).ok_or_else(|| {
        AutCmdError::UnknownOrder {
            token: text.to_string(),
        }
    })
}

/// Format the `-o` value for `operation`
///
/// `encoding` is `None` when the caller leaves the encoding implicit; the
/// default direction table applies then. Returns `Ok(None)` for an
/// operation that takes no options and was given none.
///
/// # Errors
///
/// - `MissingOptions` if the operation reads options and `options` is `None`
/// - `InvalidOptionsShape` if the options hold the wrong field, or are given
///   to an operation that takes none
pub fn option_token(
    operation: Operation,
    encoding: Option<Encoding>,
    options: Option<&Options>,
) -> Result<Option<String>> {
    let token = match operation {
        Operation::Simulation => {
            let direction = read_direction(operation, options)?;
            let value = match encoding {
                Some(encoding) => direction_token(encoding, direction),
                None => default_direction_token(direction),
            };
            format!("{DIR_PREFIX}{value}")
        }
        Operation::Reduction => {
            let direction = read_direction(operation, options)?;
            format!("{DIR_PREFIX}{}", default_direction_token(direction))
        }
        Operation::Equivalence => {
            let order = read_order(operation, options)?;
            format!("{ORDER_PREFIX}{}", order_token(order))
        }
        Operation::Inclusion => {
            let order = read_order(operation, options)?;
            format!("{DIR_PREFIX}{}", order_token(order))
        }
        Operation::Load
        | Operation::Witness
        | Operation::Complement
        | Operation::Union
        | Operation::Intersection => match options {
            None => return Ok(None),
            Some(options) => {
                return Err(AutCmdError::InvalidOptionsShape {
                    operation: operation.name().to_string(),
                    expected: "no".to_string(),
                    found: options.kind().name().to_string(),
                });
            }
        },
    };

    Ok(Some(token))
}

fn read_direction(operation: Operation, options: Option<&Options>) -> Result<Direction> {
    match options {
        Some(Options::Direction(direction)) => Ok(*direction),
        other => Err(options_error(operation, OptionsKind::Direction, other)),
    }
}

fn read_order(operation: Operation, options: Option<&Options>) -> Result<Order> {
    match options {
        Some(Options::Order(order)) => Ok(*order),
        other => Err(options_error(operation, OptionsKind::Order, other)),
    }
}

fn options_error(operation: Operation, expected: OptionsKind, found: Option<&Options>) -> AutCmdError {
    match found {
        None => AutCmdError::MissingOptions {
            operation: operation.name().to_string(),
            expected: expected.name().to_string(),
        },
        Some(options) => AutCmdError::InvalidOptionsShape {
            operation: operation.name().to_string(),
            expected: expected.name().to_string(),
            found: options.kind().name().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_token_selects_fa_table() {
        assert_eq!(direction_token(Encoding::ExplicitFa, Direction::Backward), "BWD");
        assert_eq!(direction_token(Encoding::Explicit, Direction::Backward), "DOWN");
        assert_eq!(direction_token(Encoding::BddBottomUp, Direction::Forward), "UP");
    }

    fn expected_direction_value(
        operation: Operation,
        encoding: Encoding,
        direction: Direction,
    ) -> &'static str {
        let fa = operation == Operation::Simulation && encoding == Encoding::ExplicitFa;
        match (fa, direction) {
            (true, Direction::Forward) => "FWD",
            (true, Direction::Backward) => "BWD",
            (false, Direction::Forward) => "UP",
            (false, Direction::Backward) => "DOWN",
        }
    }

    fn expected_order_value(order: Order) -> &'static str {
        match order {
            Order::Lexicographic => "LEX",
            Order::DepthFirst => "DEPTH",
            Order::BreadthFirst => "BREADTH",
        }
    }

    #[test]
    fn test_option_token_table() {
        for encoding in Encoding::ALL {
            for operation in [Operation::Simulation, Operation::Reduction] {
                for direction in Direction::ALL {
                    let opts = Options::Direction(direction);
                    let expected = format!(
                        "dir={}",
                        expected_direction_value(operation, encoding, direction)
                    );
                    assert_eq!(
                        option_token(operation, Some(encoding), Some(&opts)).unwrap(),
                        Some(expected),
                        "{operation:?} {encoding:?} {direction:?}"
                    );
                }
            }

            for order in Order::ALL {
                let opts = Options::Order(order);
                let value = expected_order_value(order);
                assert_eq!(
                    option_token(Operation::Equivalence, Some(encoding), Some(&opts)).unwrap(),
                    Some(format!("order={value}")),
                    "equivalence {encoding:?} {order:?}"
                );
                assert_eq!(
                    option_token(Operation::Inclusion, Some(encoding), Some(&opts)).unwrap(),
                    Some(format!("dir={value}")),
                    "inclusion {encoding:?} {order:?}"
                );
            }
        }
    }

    #[test]
    fn test_option_token_implicit_encoding_uses_default_table() {
        let opts = Options::Direction(Direction::Forward);
        assert_eq!(
            option_token(Operation::Simulation, None, Some(&opts)).unwrap(),
            Some("dir=UP".to_string())
        );
    }

    #[test]
    fn test_option_token_missing() {
        let err = option_token(Operation::Equivalence, None, None).unwrap_err();
        assert!(matches!(err, AutCmdError::MissingOptions { .. }));
    }

    #[test]
    fn test_option_token_wrong_shape() {
        let opts = Options::Order(Order::Lexicographic);
        let err = option_token(Operation::Reduction, None, Some(&opts)).unwrap_err();
        assert_eq!(
            err,
            AutCmdError::InvalidOptionsShape {
                operation: "reduction".to_string(),
                expected: "direction".to_string(),
                found: "order".to_string(),
            }
        );
    }

    #[test]
    fn test_option_token_on_optionless_operation() {
        let opts = Options::Direction(Direction::Forward);
        let err = option_token(Operation::Union, None, Some(&opts)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Operation union expects no options, got direction"
        );
    }

    #[test]
    fn test_option_token_absent_for_optionless_operation() {
        for operation in Operation::ALL.into_iter().filter(|o| !o.takes_options()) {
            assert_eq!(option_token(operation, None, None).unwrap(), None, "{operation:?}");
            assert_eq!(
                option_token(operation, Some(Encoding::ExplicitFa), None).unwrap(),
                None,
                "{operation:?}"
            );
        }
    }

    #[test]
    fn test_parse_direction_accepts_both_tables() {
        assert_eq!(parse_direction("BWD").unwrap(), Direction::Backward);
        assert_eq!(parse_direction("down").unwrap(), Direction::Backward);
        assert_eq!(parse_direction("forward").unwrap(), Direction::Forward);
        assert!(matches!(
            parse_direction("sideways"),
            Err(AutCmdError::UnknownDirection { .. })
        ));
    }

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order("lex").unwrap(), Order::Lexicographic);
        assert_eq!(parse_order("breadth_first").unwrap(), Order::BreadthFirst);
        assert!(matches!(
            parse_order("random"),
            Err(AutCmdError::UnknownOrder { token }) if token == "random"
        ));
    }
}
