//! Tool configuration
//!
//! ```toml
//! [tool]
//! program = "vata"
//!
//! [logging]
//! profile = "development"
//! ```
//!
//! Every key is optional; an empty document yields the defaults.

use serde::Deserialize;
use std::path::Path;

use crate::errors::{AutCmdError, Result};
use crate::logging_facility::Profile;
use crate::model::Command;
use crate::serializer::serialize_command;

pub const DEFAULT_PROGRAM: &str = "vata";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolSection {
    /// Executable name placed in front of the serialized tokens
    pub program: String,
}

impl Default for ToolSection {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// `None` leaves logging uninitialized
    pub profile: Option<Profile>,
}

/// Settings for building invocations of the external tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub tool: ToolSection,
    pub logging: LoggingSection,
}

impl ToolConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// `InvalidConfig` on malformed TOML, unknown keys or an empty program.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ToolConfig = toml::from_str(text)?;
        if config.tool.program.trim().is_empty() {
            return Err(AutCmdError::InvalidConfig {
                message: "tool.program must not be empty".to_string(),
            });
        }
        Ok(config)
    }

    /// Read and parse a configuration file
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`ToolConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded tool configuration");
        Self::from_toml_str(&text)
    }

    /// Full argument vector: program name followed by the command's tokens
    ///
    /// Only assembles the vector; nothing is executed.
    ///
    /// # Errors
    ///
    /// Whatever [`serialize_command`] reports for `command`.
    pub fn argv(&self, command: &Command) -> Result<Vec<String>> {
        let mut argv = vec![self.tool.program.clone()];
        argv.extend(serialize_command(command)?);
        Ok(argv)
    }
}
