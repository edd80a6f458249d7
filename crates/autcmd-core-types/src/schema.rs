//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the logging macros,
//! the test capture layer, and anything that consumes the JSON log stream.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Request description
pub const FIELD_ENCODING: &str = "encoding";
pub const FIELD_OPERATION: &str = "operation";
pub const FIELD_OPERAND_COUNT: &str = "operand_count";

// Output sizes
pub const FIELD_TOKEN_COUNT: &str = "token_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
