//! Cryptographic digests: MD5, SHA-1, SHA-256, SHA-384 and SHA-512.
//!
//! [`digest`] returns the raw hash, [`digest_hex`] its lowercase hexadecimal
//! form. Both are available for every [`Algorithm`], and the output length
//! depends only on the algorithm.
//!
//! ```
//! use kotoba_digest::{Algorithm, digest_hex};
//!
//! assert_eq!(
//!     digest_hex(Algorithm::Md5, b""),
//!     "d41d8cd98f00b204e9800998ecf8427e"
//! );
//! ```

pub mod error;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::trace;

pub use error::Error;

const MD5_NAME: &str = "md5";
const SHA1_NAME: &str = "sha1";
const SHA256_NAME: &str = "sha256";
const SHA384_NAME: &str = "sha384";
const SHA512_NAME: &str = "sha512";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// 128-bit MD5 (RFC 1321)
    Md5,
    /// 160-bit SHA-1 (FIPS 180-4)
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Length in bytes of every digest produced by this algorithm.
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => MD5_NAME,
            Algorithm::Sha1 => SHA1_NAME,
            Algorithm::Sha256 => SHA256_NAME,
            Algorithm::Sha384 => SHA384_NAME,
            Algorithm::Sha512 => SHA512_NAME,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts the names case-insensitively, with or without a dash
    /// (`SHA-256`, `sha256`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        match normalized.as_str() {
            MD5_NAME => Ok(Algorithm::Md5),
            SHA1_NAME => Ok(Algorithm::Sha1),
            SHA256_NAME => Ok(Algorithm::Sha256),
            SHA384_NAME => Ok(Algorithm::Sha384),
            SHA512_NAME => Ok(Algorithm::Sha512),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Computes the digest of `data` with `algorithm`.
pub fn digest(algorithm: Algorithm, data: impl AsRef<[u8]>) -> Vec<u8> {
    let data = data.as_ref();
    trace!(%algorithm, len = data.len(), "computing digest");
    match algorithm {
        Algorithm::Md5 => hash::<Md5>(data),
        Algorithm::Sha1 => hash::<Sha1>(data),
        Algorithm::Sha256 => hash::<Sha256>(data),
        Algorithm::Sha384 => hash::<Sha384>(data),
        Algorithm::Sha512 => hash::<Sha512>(data),
    }
}

/// Computes the digest of `data` and returns it as lowercase hex.
pub fn digest_hex(algorithm: Algorithm, data: impl AsRef<[u8]>) -> String {
    hex::encode(digest(algorithm, data))
}

fn hash<D: Digest>(data: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}
