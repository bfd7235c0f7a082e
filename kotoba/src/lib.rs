//! # kotoba
//!
//! Core traits and containers shared by the kotoba codec crates.
//!
//! ## Overview
//!
//! Every codec in the workspace is a stateless set of free functions. On top of
//! those, the codecs that turn one representation into another also implement
//! the `Decoder` and `Encoder` traits defined here, so callers can chain
//! conversions in a type-directed way:
//! ```text
//! Vec<u8> → Base64 / Hex           (kotoba-bytecodec)
//! &str    → Node → String (XML)     (kotoba-tree)
//! &str    → QueryParams            (kotoba-query)
//! ```
//!
//! ## Type Safety
//!
//! The marker traits `DecodableFrom` and `EncodableTo` restrict each trait to
//! the conversions that were explicitly declared, so an undeclared pair of
//! types is rejected at compile time.
//!
//! ## Ordered maps
//!
//! `OrderedMap` is the insertion-ordered, string-keyed map used by the
//! structural tree and the query-string parser.
//!
//! ## Example
//!
//! ```ignore
//! use kotoba::decoder::Decoder;
//! use kotoba::encoder::Encoder;
//! use kotoba_bytecodec::Base64;
//!
//! let encoded: Base64 = b"hello".to_vec().encode()?;
//! let bytes: Vec<u8> = encoded.decode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
pub mod map;

pub use map::OrderedMap;
