//! Utilities: small, reusable helpers used across the crate.
//!
//! Currently limited to hex formatting and parsing, which the codec uses for
//! its textual entry points and display impls.

pub mod hex;

// Re-export the helpers at the `utils` module level so callers can use
// `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
