//! Encoding catalog

use super::lookup;
use crate::errors::{AutCmdError, Result};
use crate::model::Encoding;

/// Canonical token passed after `-r`
pub fn encoding_token(encoding: Encoding) -> &'static str {
    match encoding {
        Encoding::Explicit => "EXPL",
        Encoding::ExplicitFa => "EFA",
        Encoding::BddTopDown => "BDD_TD",
        Encoding::BddBottomUp => "BDD_BU",
    }
}

/// Resolve a token or snake_case name to an encoding
///
/// # Errors
///
/// `UnknownEncoding` if `text` names no encoding.
pub fn parse_encoding(text: &str) -> Result<Encoding> {
    lookup(&Encoding::ALL, text, |e| [encoding_token(e), e.name()]).ok_or_else(|| {
        AutCmdError::UnknownEncoding {
            token: text.to_string(),
        }
    })
}
