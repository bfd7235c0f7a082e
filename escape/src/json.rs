//! Body of a JSON string literal (RFC 8259 section 7), without the quotes.

use serde_json::Value;
use tracing::debug;

use crate::error::Error;

/// Escapes quotes, backslashes and control characters the way a JSON string
/// literal requires. Non-ASCII characters are kept as they are.
pub fn escape(text: &str) -> String {
    let literal = Value::String(text.to_string()).to_string();
    // serializing a string always yields `"..."`
    literal[1..literal.len() - 1].to_string()
}

pub fn unescape(text: &str) -> Result<String, Error> {
    serde_json::from_str::<String>(&format!("\"{text}\"")).map_err(|e| {
        debug!(error = %e, "rejected JSON string body");
        Error::Json(e)
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{escape, unescape};
    use crate::error::Error;

    #[rstest(
        input,
        expected,
        case("", ""),
        case("plain", "plain"),
        case("say \"hi\"", r#"say \"hi\""#),
        case("back\\slash", r"back\\slash"),
        case("line\nbreak\ttab", r"line\nbreak\ttab"),
        case("\u{1}", r"\u0001"),
        case("ünïcødé ✓", "ünïcødé ✓")
    )]
    fn test_escape(input: &str, expected: &str) {
        assert_eq!(expected, escape(input));
    }

    #[rstest(
        input,
        expected,
        case("", ""),
        case(r#"say \"hi\""#, "say \"hi\""),
        case(r"é\/\b\f", "é/\u{8}\u{c}"),
        case(r"\ud83d\ude00", "😀")
    )]
    fn test_unescape(input: &str, expected: &str) {
        assert_eq!(expected, unescape(input).unwrap());
    }

    #[rstest]
    #[case::bare_quote("a\"b")]
    #[case::unknown_escape(r"\q")]
    #[case::short_unicode(r"\u12")]
    #[case::trailing_backslash("abc\\")]
    #[case::raw_control("a\nb")]
    fn test_unescape_with_error(#[case] input: &str) {
        assert!(matches!(unescape(input), Err(Error::Json(_))));
    }
}
