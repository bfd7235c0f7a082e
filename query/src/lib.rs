//! Raw query-string parsing.
//!
//! [`parse`] splits a query string such as `a=1&b=2&b=3&flag` into an ordered
//! map. Keys keep the order of their first appearance; a key seen more than
//! once collects all of its values in occurrence order. Values are not
//! percent-decoded.
//!
//! ```
//! use kotoba_query::{QueryValue, parse};
//!
//! let params = parse("a=1&b=2&b=3&flag");
//! assert_eq!(params.get("a"), Some(&QueryValue::Single("1".to_string())));
//! assert_eq!(params.get("flag"), Some(&QueryValue::Present));
//! ```

use std::convert::Infallible;

use kotoba::OrderedMap;
use kotoba::decoder::{DecodableFrom, Decoder};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use tracing::trace;

/// Value of one query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// The key appeared without `=`, e.g. `?flag`
    Present,
    Single(String),
    /// The key appeared more than once
    Multiple(Vec<String>),
}

impl QueryValue {
    /// Text of a `Present` value when it is folded into `Multiple`.
    pub const PRESENT_TEXT: &'static str = "true";

    fn into_text(self) -> Vec<String> {
        match self {
            QueryValue::Present => vec![Self::PRESENT_TEXT.to_string()],
            QueryValue::Single(v) => vec![v],
            QueryValue::Multiple(vs) => vs,
        }
    }

    fn push(&mut self, next: QueryValue) {
        let mut values = std::mem::replace(self, QueryValue::Present).into_text();
        values.extend(next.into_text());
        *self = QueryValue::Multiple(values);
    }

    /// All values as text, `Present` being `"true"`.
    pub fn values(&self) -> Vec<&str> {
        match self {
            QueryValue::Present => vec![Self::PRESENT_TEXT],
            QueryValue::Single(v) => vec![v.as_str()],
            QueryValue::Multiple(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QueryValue::Present => serializer.serialize_bool(true),
            QueryValue::Single(v) => serializer.serialize_str(v),
            QueryValue::Multiple(vs) => {
                let mut seq = serializer.serialize_seq(Some(vs.len()))?;
                for v in vs {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
        }
    }
}

/// Parsed query parameters in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: OrderedMap<QueryValue>,
}

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter()
    }

    fn add(&mut self, key: &str, value: QueryValue) {
        match self.params.get_mut(key) {
            Some(existing) => existing.push(value),
            None => {
                self.params.insert(key, value);
            }
        }
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.params.iter())
    }
}

/// Parses a raw query string (without the leading `?`).
///
/// Segments are separated by `&`. Every literal `amp;` is removed from a
/// segment first, so double-encoded separators (`&amp;`) still split. The
/// segment is cut at its first `=`; key and value are trimmed. A segment
/// without `=` marks its key as [`QueryValue::Present`]. Empty segments are
/// skipped.
pub fn parse(raw: &str) -> QueryParams {
    let mut params = QueryParams::default();
    for segment in raw.split('&') {
        let segment = segment.replace("amp;", "");
        if segment.trim().is_empty() {
            continue;
        }
        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (key, QueryValue::Single(value.trim().to_string())),
            None => (segment.as_str(), QueryValue::Present),
        };
        params.add(key.trim(), value);
    }
    trace!(len = raw.len(), keys = params.len(), "parsed query string");
    params
}

impl DecodableFrom<&str> for QueryParams {}

impl Decoder<&str, QueryParams> for &str {
    type Error = Infallible;

    fn decode(&self) -> Result<QueryParams, Self::Error> {
        Ok(parse(self))
    }
}
