use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::OptionsKind;
use crate::catalog;
use crate::errors::AutCmdError;

/// Automata computation requested from the external tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Load,
    Witness,
    Complement,
    Union,
    Intersection,
    Simulation,
    Reduction,
    Equivalence,
    Inclusion,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Load,
        Operation::Witness,
        Operation::Complement,
        Operation::Union,
        Operation::Intersection,
        Operation::Simulation,
        Operation::Reduction,
        Operation::Equivalence,
        Operation::Inclusion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Witness => "witness",
            Operation::Complement => "complement",
            Operation::Union => "union",
            Operation::Intersection => "intersection",
            Operation::Simulation => "simulation",
            Operation::Reduction => "reduction",
            Operation::Equivalence => "equivalence",
            Operation::Inclusion => "inclusion",
        }
    }

    /// Shape of options this operation reads, `None` if it takes none
    ///
    /// Inclusion reads an order (and is emitted under the `dir=` prefix),
    /// matching what the tool front end has always sent.
    pub fn options_kind(&self) -> Option<OptionsKind> {
        match self {
            Operation::Simulation | Operation::Reduction => Some(OptionsKind::Direction),
            Operation::Equivalence | Operation::Inclusion => Some(OptionsKind::Order),
            Operation::Load
            | Operation::Witness
            | Operation::Complement
            | Operation::Union
            | Operation::Intersection => None,
        }
    }

    pub fn takes_options(&self) -> bool {
        self.options_kind().is_some()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(catalog::operation_token(*self))
    }
}

impl FromStr for Operation {
    type Err = AutCmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        catalog::parse_operation(s)
    }
}
