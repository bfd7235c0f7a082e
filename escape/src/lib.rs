//! String escaping for several target syntaxes.
//!
//! Each [`Dialect`] has an escape function that never fails and an unescape
//! function that reverses it. Only JSON unescaping can fail, because its input
//! must be a well-formed string literal body; the other dialects copy anything
//! they do not recognize through unchanged.
//!
//! ```
//! use kotoba_escape::{Dialect, escape, unescape};
//!
//! assert_eq!(escape(Dialect::Csv, "a\"b"), "\"a\"\"b\"");
//! assert_eq!(escape(Dialect::Generic, "a\nb\"c"), "a\\nb\\\"c");
//! assert_eq!(unescape(Dialect::Xml, "&lt;&apos;&gt;").unwrap(), "<'>");
//! ```

pub mod csv;
pub mod error;
pub mod generic;
pub mod json;
pub mod markup;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use tracing::trace;

pub use error::Error;

const CSV_NAME: &str = "csv";
const JSON_NAME: &str = "json";
const HTML_NAME: &str = "html";
const HTML3_NAME: &str = "html3";
const HTML4_NAME: &str = "html4";
const XML_NAME: &str = "xml";
const GENERIC_NAME: &str = "generic";
const JAVA_NAME: &str = "java";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// RFC 4180 field quoting
    Csv,
    /// JSON string literal body
    Json,
    /// HTML character references; the historical HTML3 and HTML4 variants are
    /// the same dialect
    Html,
    /// XML predefined entities
    Xml,
    /// Backslash escapes with `\uXXXX` for non-printable and non-ASCII text
    Generic,
}

impl Dialect {
    pub const ALL: [Dialect; 5] = [
        Dialect::Csv,
        Dialect::Json,
        Dialect::Html,
        Dialect::Xml,
        Dialect::Generic,
    ];
}

impl Display for Dialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dialect::Csv => CSV_NAME,
            Dialect::Json => JSON_NAME,
            Dialect::Html => HTML_NAME,
            Dialect::Xml => XML_NAME,
            Dialect::Generic => GENERIC_NAME,
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            CSV_NAME => Ok(Dialect::Csv),
            JSON_NAME => Ok(Dialect::Json),
            HTML_NAME | HTML3_NAME | HTML4_NAME => Ok(Dialect::Html),
            XML_NAME => Ok(Dialect::Xml),
            GENERIC_NAME | JAVA_NAME => Ok(Dialect::Generic),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}

/// Escapes `text` for `dialect`. Empty text always escapes to empty text.
pub fn escape(dialect: Dialect, text: &str) -> String {
    trace!(%dialect, len = text.len(), "escape");
    match dialect {
        Dialect::Csv => csv::escape(text),
        Dialect::Json => json::escape(text),
        Dialect::Html => markup::escape_html(text),
        Dialect::Xml => markup::escape_xml(text),
        Dialect::Generic => generic::escape(text),
    }
}

/// Reverses [`escape`].
///
/// # Errors
///
/// Returns [`Error::Json`] when `dialect` is JSON and `text` is not a valid
/// string literal body. Every other dialect succeeds.
pub fn unescape(dialect: Dialect, text: &str) -> Result<String, Error> {
    trace!(%dialect, len = text.len(), "unescape");
    match dialect {
        Dialect::Csv => Ok(csv::unescape(text)),
        Dialect::Json => json::unescape(text),
        Dialect::Html => Ok(markup::unescape_html(text)),
        Dialect::Xml => Ok(markup::unescape_xml(text)),
        Dialect::Generic => Ok(generic::unescape(text)),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::{Dialect, Error, escape, unescape};

    #[rstest]
    fn test_roundtrip(
        #[values(
            Dialect::Csv,
            Dialect::Json,
            Dialect::Html,
            Dialect::Xml,
            Dialect::Generic
        )]
        dialect: Dialect,
        #[values(
            "",
            "plain ascii",
            "quotes \" and ' and \"\"",
            "<tag attr=\"v\">a & b</tag>",
            "back\\slash\\n not a newline",
            "line\nbreak\r\ttab\u{1}\u{7f}",
            "&amp; already escaped &#39;",
            "ünïcødé 日本語 😀"
        )]
        text: &str,
    ) {
        let escaped = escape(dialect, text);
        assert_eq!(text, unescape(dialect, &escaped).unwrap(), "{dialect}: {escaped:?}");
    }

    #[rstest(
        input,
        expected,
        case("csv", Dialect::Csv),
        case("JSON", Dialect::Json),
        case("html", Dialect::Html),
        case("HTML3", Dialect::Html),
        case("html4", Dialect::Html),
        case("xml", Dialect::Xml),
        case("generic", Dialect::Generic),
        case("java", Dialect::Generic)
    )]
    fn test_from_str(input: &str, expected: Dialect) {
        assert_eq!(expected, Dialect::from_str(input).unwrap());
    }

    #[test]
    fn test_from_str_unknown() {
        assert!(matches!(
            Dialect::from_str("yaml"),
            Err(Error::UnknownDialect(name)) if name == "yaml"
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect, dialect.to_string().parse::<Dialect>().unwrap());
        }
    }

    #[test]
    fn test_html_and_xml_differ_on_apostrophe() {
        assert_eq!("&#39;", escape(Dialect::Html, "'"));
        assert_eq!("&apos;", escape(Dialect::Xml, "'"));
        assert_eq!("&quot;", escape(Dialect::Html, "\""));
        assert_eq!("&quot;", escape(Dialect::Xml, "\""));
    }

    #[test]
    fn test_only_json_unescape_fails() {
        for dialect in Dialect::ALL {
            let result = unescape(dialect, "broken \" \\q &bogus; \\u12");
            assert_eq!(dialect == Dialect::Json, result.is_err(), "{dialect}");
        }
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<Dialect>();
        assert_send_sync::<Error>();
    }
}
