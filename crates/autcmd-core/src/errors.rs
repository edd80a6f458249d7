use thiserror::Error;

/// Result type alias using AutCmdError
pub type Result<T> = std::result::Result<T, AutCmdError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// tests, and log filtering. Lookup and shape errors are caller contract
/// violations; the remaining kinds belong to the configuration and I/O edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Catalog lookups
    UnknownEncoding,
    UnknownOperation,
    UnknownDirection,
    UnknownOrder,

    // Command shape
    MissingOptions,
    InvalidOptionsShape,

    // Edges
    InvalidConfig,
    Serialization,
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnknownEncoding => "ERR_UNKNOWN_ENCODING",
            ExErrorKind::UnknownOperation => "ERR_UNKNOWN_OPERATION",
            ExErrorKind::UnknownDirection => "ERR_UNKNOWN_DIRECTION",
            ExErrorKind::UnknownOrder => "ERR_UNKNOWN_ORDER",
            ExErrorKind::MissingOptions => "ERR_MISSING_OPTIONS",
            ExErrorKind::InvalidOptionsShape => "ERR_INVALID_OPTIONS_SHAPE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
        }
    }

    /// True for kinds that can only be produced by a caller building an
    /// invalid request (as opposed to bad files or environment).
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::UnknownEncoding
                | ExErrorKind::UnknownOperation
                | ExErrorKind::UnknownDirection
                | ExErrorKind::UnknownOrder
                | ExErrorKind::MissingOptions
                | ExErrorKind::InvalidOptionsShape
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever request context was known at the
/// failure point.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    operation: Option<String>,
    token: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            operation: None,
            token: None,
            message: String::new(),
        }
    }

    /// Add operation context (the library call that failed)
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the automata operation the request was for
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Add the offending input token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the library call context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the automata operation context, if any
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// Get the offending token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(operation) = &self.operation {
            write!(f, " (operation: {})", operation)?;
        }
        if let Some(token) = &self.token {
            write!(f, " (token: {})", token)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for request serialization
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AutCmdError {
    // ===== Catalog Lookups =====
    /// Text does not name any encoding
    #[error("Unknown encoding: {token}")]
    UnknownEncoding { token: String },

    /// Text does not name any operation
    #[error("Unknown operation: {token}")]
    UnknownOperation { token: String },

    /// Text does not name any direction
    #[error("Unknown direction: {token}")]
    UnknownDirection { token: String },

    /// Text does not name any order
    #[error("Unknown order: {token}")]
    UnknownOrder { token: String },

    // ===== Command Shape =====
    /// Operation requires options but none were given
    #[error("Operation {operation} requires {expected} options but none were given")]
    MissingOptions { operation: String, expected: String },

    /// Options hold the wrong field for the operation (or the operation takes none)
    #[error("Operation {operation} expects {expected} options, got {found}")]
    InvalidOptionsShape {
        operation: String,
        expected: String,
        found: String,
    },

    // ===== Edges =====
    /// Tool configuration could not be parsed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Reading a file failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl AutCmdError {
    /// Classify this error into the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            AutCmdError::UnknownEncoding { .. } => ExErrorKind::UnknownEncoding,
            AutCmdError::UnknownOperation { .. } => ExErrorKind::UnknownOperation,
            AutCmdError::UnknownDirection { .. } => ExErrorKind::UnknownDirection,
            AutCmdError::UnknownOrder { .. } => ExErrorKind::UnknownOrder,
            AutCmdError::MissingOptions { .. } => ExErrorKind::MissingOptions,
            AutCmdError::InvalidOptionsShape { .. } => ExErrorKind::InvalidOptionsShape,
            AutCmdError::InvalidConfig { .. } => ExErrorKind::InvalidConfig,
            AutCmdError::Serialization { .. } => ExErrorKind::Serialization,
            AutCmdError::Io { .. } => ExErrorKind::Io,
        }
    }
}

/// Conversion from AutCmdError to the structured ExError
impl From<AutCmdError> for ExError {
    fn from(err: AutCmdError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            AutCmdError::UnknownEncoding { token }
            | AutCmdError::UnknownOperation { token }
            | AutCmdError::UnknownDirection { token }
            | AutCmdError::UnknownOrder { token } => ExError::new(kind)
                .with_token(token)
                .with_message(message),

            AutCmdError::MissingOptions { operation, .. }
            | AutCmdError::InvalidOptionsShape { operation, .. } => ExError::new(kind)
                .with_operation(operation)
                .with_message(message),

            AutCmdError::InvalidConfig { .. }
            | AutCmdError::Serialization { .. }
            | AutCmdError::Io { .. } => ExError::new(kind).with_message(message),
        }
    }
}

/// Conversion from serde_json::Error to AutCmdError
impl From<serde_json::Error> for AutCmdError {
    fn from(err: serde_json::Error) -> Self {
        AutCmdError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AutCmdError {
    fn from(err: toml::de::Error) -> Self {
        AutCmdError::InvalidConfig {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AutCmdError {
    fn from(err: std::io::Error) -> Self {
        AutCmdError::Io {
            message: err.to_string(),
        }
    }
}
