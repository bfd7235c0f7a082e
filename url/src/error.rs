use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown charset: {0}")]
    UnknownCharset(String),

    /// A character of the input has no representation in the charset
    #[error("text is not representable in {0}")]
    Unmappable(&'static str),

    /// `%` not followed by two hexadecimal digits
    #[error("malformed percent sequence at byte {0}")]
    MalformedPercent(usize),

    /// The decoded bytes are not valid in the charset
    #[error("decoded bytes are not valid {0}")]
    Malformed(&'static str),
}
