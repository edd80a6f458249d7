use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog;
use crate::errors::AutCmdError;

/// Automaton representation family a request operates over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Explicit tree automaton
    Explicit,
    /// Explicit finite (word) automaton
    ExplicitFa,
    /// BDD-based tree automaton, top-down transitions
    BddTopDown,
    /// BDD-based tree automaton, bottom-up transitions
    BddBottomUp,
}

impl Encoding {
    pub const ALL: [Encoding; 4] = [
        Encoding::Explicit,
        Encoding::ExplicitFa,
        Encoding::BddTopDown,
        Encoding::BddBottomUp,
    ];

    /// snake_case name, as used in JSON requests
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Explicit => "explicit",
            Encoding::ExplicitFa => "explicit_fa",
            Encoding::BddTopDown => "bdd_top_down",
            Encoding::BddBottomUp => "bdd_bottom_up",
        }
    }

    /// True for the encoding whose simulation uses the FA direction table
    pub fn is_explicit_fa(&self) -> bool {
        matches!(self, Encoding::ExplicitFa)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(catalog::encoding_token(*self))
    }
}

impl FromStr for Encoding {
    type Err = AutCmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        catalog::parse_encoding(s)
    }
}
