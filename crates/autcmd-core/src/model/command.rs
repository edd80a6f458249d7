//! The request aggregate handed to the serializer

use serde::{Deserialize, Serialize};

use super::{Encoding, Operation, Options};

/// A single automata-tool request
///
/// Built by the caller, serialized once, then dropped. `options` is only
/// meaningful for operations whose [`Operation::options_kind`] is `Some`;
/// the serializer rejects any other combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Command {
    pub encoding: Encoding,
    pub operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
    #[serde(default)]
    pub operands: Vec<String>,
}

impl Command {
    /// Create a command without options
    pub fn new<I, S>(encoding: Encoding, operation: Operation, operands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            encoding,
            operation,
            options: None,
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach options (a `Direction` or an `Order`)
    pub fn with_options(mut self, options: impl Into<Options>) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Deserialize a command from its JSON form
    ///
    /// # Errors
    ///
    /// `Serialization` if the JSON is malformed, has unknown keys or names
    /// unknown variants.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
