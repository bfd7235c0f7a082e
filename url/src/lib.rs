//! Percent-encoding (RFC 3986 section 2.1).
//!
//! [`encode`]/[`decode`] work in any WHATWG charset and keep only the
//! unreserved characters (`A-Z a-z 0-9 - . _ ~`) literal. [`escape`] and
//! [`escape_path`] are the UTF-8 shorthands, the latter leaving `/` alone.
//! [`escape_form`]/[`decode_form`] follow `application/x-www-form-urlencoded`
//! where a space is `+`.
//!
//! ```
//! assert_eq!(kotoba_url::escape_path("/a b/c"), "/a%20b/c");
//! assert_eq!(kotoba_url::escape_form("a b&c"), "a+b%26c");
//! ```

pub mod error;

use encoding_rs::{Encoding, UTF_8};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, percent_encode};
use tracing::{debug, trace};

pub use error::Error;

/// Everything except the RFC 3986 unreserved characters.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const PATH: &AsciiSet = &UNRESERVED.remove(b'/');

/// WHATWG urlencoded serializer set, minus the space handled as `+`.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Percent-encodes `text` after converting it to bytes in `charset`.
///
/// `charset` is a WHATWG label such as `utf-8`, `iso-8859-1` or `shift_jis`.
/// The UTF-16 labels encode as UTF-8, as the Encoding Standard prescribes.
pub fn encode(text: &str, charset: &str) -> Result<String, Error> {
    let encoding = lookup(charset)?;
    let (bytes, used, unmappable) = encoding.encode(text);
    if unmappable {
        debug!(charset = used.name(), "text not representable in charset");
        return Err(Error::Unmappable(used.name()));
    }
    Ok(percent_encode(&bytes, UNRESERVED).to_string())
}

/// Decodes `%XX` sequences and interprets the bytes in `charset`.
///
/// `+` is not treated as a space; see [`decode_form`].
pub fn decode(text: &str, charset: &str) -> Result<String, Error> {
    let encoding = lookup(charset)?;
    let bytes = percent_decode_strict(text.as_bytes())?;
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(|s| s.into_owned())
        .ok_or_else(|| {
            debug!(charset = encoding.name(), "decoded bytes invalid for charset");
            Error::Malformed(encoding.name())
        })
}

/// UTF-8 percent-encoding keeping only unreserved characters.
pub fn escape(text: &str) -> String {
    percent_encode(text.as_bytes(), UNRESERVED).to_string()
}

/// Like [`escape`] but the path separator `/` is kept.
pub fn escape_path(text: &str) -> String {
    percent_encode(text.as_bytes(), PATH).to_string()
}

/// Form encoding: alphanumerics and `* - . _` are kept, a space becomes `+`.
pub fn escape_form(text: &str) -> String {
    text.split(' ')
        .map(|part| percent_encode(part.as_bytes(), FORM).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Reverses [`escape_form`]: `+` becomes a space, then `%XX` is decoded as
/// UTF-8.
pub fn decode_form(text: &str) -> Result<String, Error> {
    decode(&text.replace('+', " "), UTF_8.name())
}

fn lookup(charset: &str) -> Result<&'static Encoding, Error> {
    trace!(charset, "resolving charset");
    Encoding::for_label(charset.trim().as_bytes())
        .ok_or_else(|| Error::UnknownCharset(charset.to_string()))
}

/// `percent_decode` passes malformed sequences through; reject them first.
fn percent_decode_strict(input: &[u8]) -> Result<Vec<u8>, Error> {
    for (i, _) in input.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let well_formed = input
            .get(i + 1..i + 3)
            .is_some_and(|digits| digits.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            debug!(position = i, "malformed percent sequence");
            return Err(Error::MalformedPercent(i));
        }
    }
    Ok(percent_decode(input).collect())
}
