// apdu-rs/apdu/src/error.rs

use thiserror::Error;

use crate::protocol::status::StatusWord;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid frame length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Lc declares {declared} data bytes, only {available} present")]
    DataLengthMismatch { declared: usize, available: usize },

    #[error("hex parse error: {0}")]
    HexParse(String),

    // `data` keeps whatever payload preceded the status word so callers can
    // still inspect a partial response after a failed command.
    #[error("status error: {sw}")]
    Status { sw: StatusWord, data: Vec<u8> },
}

pub type Result<T> = std::result::Result<T, Error>;
