//! Read-only lookup tables between model variants and tool tokens
//!
//! Every forward mapping is an exhaustive `match`, so adding a variant fails
//! to compile until each table knows about it. Reverse lookups (`parse_*`)
//! are where the `Unknown*` errors come from.

pub mod encoding;
pub mod operation;
pub mod option;

pub use encoding::{encoding_token, parse_encoding};
pub use operation::{operation_token, parse_operation};
pub use option::{
    default_direction_token, direction_token, fa_direction_token, option_token, order_token,
    parse_direction, parse_order, DIR_PREFIX, ORDER_PREFIX,
};

/// Case-insensitive reverse lookup over a closed variant set
///
/// A variant matches when `text` equals any of the names `names_of` yields
/// for it.
pub(crate) fn lookup<T, F, I, const N: usize>(all: &[T; N], text: &str, names_of: F) -> Option<T>
where
    T: Copy,
    F: Fn(T) -> I,
    I: IntoIterator<Item = &'static str>,
{
    let text = text.trim();
    all.iter()
        .copied()
        .find(|variant| names_of(*variant).into_iter().any(|n| n.eq_ignore_ascii_case(text)))
}
