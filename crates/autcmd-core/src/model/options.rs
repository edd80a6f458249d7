//! Operation-specific parameters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog;
use crate::errors::AutCmdError;

/// Traversal direction for simulation and reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Forward, Direction::Backward];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// Prints the name; the token depends on the encoding's direction table
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = AutCmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        catalog::parse_direction(s)
    }
}

/// Exploration order for equivalence and inclusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    Lexicographic,
    DepthFirst,
    BreadthFirst,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::Lexicographic, Order::DepthFirst, Order::BreadthFirst];

    pub fn name(&self) -> &'static str {
        match self {
            Order::Lexicographic => "lexicographic",
            Order::DepthFirst => "depth_first",
            Order::BreadthFirst => "breadth_first",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(catalog::order_token(*self))
    }
}

impl FromStr for Order {
    type Err = AutCmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        catalog::parse_order(s)
    }
}

/// Which field an operation's options carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsKind {
    Direction,
    Order,
}

impl OptionsKind {
    pub fn name(&self) -> &'static str {
        match self {
            OptionsKind::Direction => "direction",
            OptionsKind::Order => "order",
        }
    }
}

/// Options attached to a command, holding either a direction or an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Options {
    Direction(Direction),
    Order(Order),
}

impl Options {
    pub fn kind(&self) -> OptionsKind {
        match self {
            Options::Direction(_) => OptionsKind::Direction,
            Options::Order(_) => OptionsKind::Order,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Options::Direction(direction) => Some(*direction),
            Options::Order(_) => None,
        }
    }

    pub fn order(&self) -> Option<Order> {
        match self {
            Options::Order(order) => Some(*order),
            Options::Direction(_) => None,
        }
    }
}

impl From<Direction> for Options {
    fn from(direction: Direction) -> Self {
        Options::Direction(direction)
    }
}

impl From<Order> for Options {
    fn from(order: Order) -> Self {
        Options::Order(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_accessors() {
        let opts = Options::from(Direction::Backward);
        assert_eq!(opts.kind(), OptionsKind::Direction);
        assert_eq!(opts.direction(), Some(Direction::Backward));
        assert_eq!(opts.order(), None);

        let opts = Options::from(Order::DepthFirst);
        assert_eq!(opts.kind(), OptionsKind::Order);
        assert_eq!(opts.order(), Some(Order::DepthFirst));
        assert_eq!(opts.direction(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Backward.to_string(), "backward");
        assert_eq!(Order::BreadthFirst.to_string(), "BREADTH");
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
    }

    #[test]
    fn test_options_json_shape() {
        let json = serde_json::to_string(&Options::Order(Order::Lexicographic)).unwrap();
        assert_eq!(json, r#"{"order":"lexicographic"}"#);

        let opts: Options = serde_json::from_str(r#"{"direction":"forward"}"#).unwrap();
        assert_eq!(opts, Options::Direction(Direction::Forward));
    }
}
