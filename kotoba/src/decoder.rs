//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts a source type `T` into a destination type `D`.
//! The codecs use it for the "parse" direction: Base64 text into bytes, XML
//! text into a structural `Node`, a raw query string into `QueryParams`.
//!
//! # Design Pattern
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! # Implementation Guide
//!
//! ```no_run
//! use kotoba::decoder::{Decoder, DecodableFrom};
//!
//! struct Upper(String);
//!
//! #[derive(Debug)]
//! struct NotAscii;
//!
//! impl DecodableFrom<&str> for Upper {}
//!
//! impl Decoder<&str, Upper> for &str {
//!     type Error = NotAscii;
//!
//!     fn decode(&self) -> Result<Upper, Self::Error> {
//!         if !self.is_ascii() {
//!             return Err(NotAscii);
//!         }
//!         Ok(Upper(self.to_ascii_uppercase()))
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type. The destination type must implement
/// `DecodableFrom<T>`.
///
/// # Type Parameters
///
/// * `T` - The source type (usually `Self`)
/// * `D` - The destination type that can be decoded from `T`
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is malformed for the target
    /// representation.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods. Implement it for every destination type next to the
/// matching `Decoder` implementation.
pub trait DecodableFrom<T> {}
