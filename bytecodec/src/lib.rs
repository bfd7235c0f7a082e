//! Base64 and hexadecimal codecs.
//!
//! Both codecs convert between raw bytes and ASCII text. Encoding never fails;
//! decoding reports malformed input through [`Error`] instead of returning an
//! empty or truncated value.
//!
//! ```
//! use kotoba_bytecodec::{base64, hex};
//!
//! assert_eq!(base64::encode("hello"), "aGVsbG8=");
//! assert_eq!(base64::decode("aGVsbG8=").unwrap(), b"hello");
//! assert_eq!(hex::encode("AB"), "4142");
//! assert_eq!(hex::decode("4142").unwrap(), b"AB");
//! ```

pub mod base64;
pub mod error;
pub mod hex;

pub use crate::base64::Base64;
pub use crate::hex::Hex;
pub use error::Error;
