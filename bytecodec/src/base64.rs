//! Base64 with the standard alphabet and `=` padding (RFC 4648 section 4).

use std::convert::Infallible;
use std::fmt::{Display, Formatter};

use ::base64::{Engine, engine::general_purpose::STANDARD};
use kotoba::decoder::{DecodableFrom, Decoder};
use kotoba::encoder::{EncodableTo, Encoder};
use tracing::debug;

use crate::error::Error;

pub fn encode(data: impl AsRef<[u8]>) -> String {
    STANDARD.encode(data)
}

/// Decodes padded standard Base64.
///
/// Unpadded input, characters outside the alphabet (including whitespace and
/// line breaks) and non-canonical trailing bits are rejected.
pub fn decode(text: &str) -> Result<Vec<u8>, Error> {
    STANDARD.decode(text).map_err(|e| {
        debug!(len = text.len(), error = %e, "rejected base64 input");
        Error::Base64(e)
    })
}

/// Decodes Base64 and interprets the result as UTF-8 text.
pub fn decode_to_string(text: &str) -> Result<String, Error> {
    String::from_utf8(decode(text)?).map_err(Error::Utf8)
}

/// Base64 text produced by [`encode`] or accepted for decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64(String);

impl Base64 {
    pub fn new(text: impl Into<String>) -> Self {
        Base64(text.into())
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Base64(encode(data))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Base64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl DecodableFrom<Base64> for Vec<u8> {}

impl Decoder<Base64, Vec<u8>> for Base64 {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        decode(&self.0)
    }
}

impl EncodableTo<Vec<u8>> for Base64 {}

impl Encoder<Vec<u8>, Base64> for Vec<u8> {
    type Error = Infallible;

    fn encode(&self) -> Result<Base64, Self::Error> {
        Ok(Base64::from_bytes(self))
    }
}
