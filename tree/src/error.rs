use std::str::Utf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A container key that cannot be used as an XML element name
    #[error("invalid element name: {0:?}")]
    InvalidTag(String),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("element <{0}> is never closed")]
    UnclosedElement(String),

    #[error("closing tag </{0}> without an open element")]
    UnexpectedEnd(String),

    #[error("XML content is not UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    /// JSON input that has no tree representation
    #[error("unsupported JSON value at {path}: {kind}")]
    UnsupportedJson { path: String, kind: &'static str },

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("element name pattern: {0}")]
    Pattern(#[from] regex::Error),
}
