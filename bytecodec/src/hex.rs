//! Lowercase hexadecimal, two digits per byte, no separators.

use std::convert::Infallible;
use std::fmt::{Display, Formatter};

use kotoba::decoder::{DecodableFrom, Decoder};
use kotoba::encoder::{EncodableTo, Encoder};
use tracing::debug;

use crate::error::Error;

pub fn encode(data: impl AsRef<[u8]>) -> String {
    ::hex::encode(data)
}

/// Decodes hexadecimal text. Upper- and lowercase digits are both accepted.
pub fn decode(text: &str) -> Result<Vec<u8>, Error> {
    ::hex::decode(text).map_err(|e| {
        debug!(len = text.len(), error = %e, "rejected hex input");
        Error::Hex(e)
    })
}

pub fn decode_to_string(text: &str) -> Result<String, Error> {
    String::from_utf8(decode(text)?).map_err(Error::Utf8)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hex(String);

impl Hex {
    pub fn new(text: impl Into<String>) -> Self {
        Hex(text.into())
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Hex(encode(data))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Hex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl DecodableFrom<Hex> for Vec<u8> {}

impl Decoder<Hex, Vec<u8>> for Hex {
    type Error = Error;

    fn decode(&self) -> Result<Vec<u8>, Self::Error> {
        decode(&self.0)
    }
}

impl EncodableTo<Vec<u8>> for Hex {}

impl Encoder<Vec<u8>, Hex> for Vec<u8> {
    type Error = Infallible;

    fn encode(&self) -> Result<Hex, Self::Error> {
        Ok(Hex::from_bytes(self))
    }
}
