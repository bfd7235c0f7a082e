use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur when decoding Base64 or hexadecimal text.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Invalid alphabet character, bad length or malformed `=` padding
    #[error("base64 decode: {0}")]
    Base64(::base64::DecodeError),

    /// Odd length or a character that is not a hex digit
    #[error("hex decode: {0}")]
    Hex(::hex::FromHexError),

    /// The decoded bytes were requested as text but are not UTF-8
    #[error("decoded bytes are not UTF-8: {0}")]
    Utf8(FromUtf8Error),
}
