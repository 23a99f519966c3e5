// apdu-rs/apdu/src/prelude.rs

pub use crate::protocol::{Command, Response, StatusWord};
pub use crate::{Error, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
