//! Core types shared across autcmd facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! structured logging macros in `autcmd-core`.

pub mod schema;
