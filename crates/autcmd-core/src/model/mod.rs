//! Request model
//!
//! Closed variant sets for everything a request can name, plus the `Command`
//! aggregate the serializer consumes. Token text lives in [`crate::catalog`];
//! `Display` and `FromStr` here delegate to it.

pub mod command;
pub mod encoding;
pub mod operation;
pub mod options;

pub use command::Command;
pub use encoding::Encoding;
pub use operation::Operation;
pub use options::{Direction, Options, OptionsKind, Order};
