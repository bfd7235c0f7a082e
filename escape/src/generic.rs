//! Backslash escaping for quoted string literals.
//!
//! Output of [`escape`] is printable ASCII only: the usual two-character
//! escapes for newline, carriage return, tab, backslash and double quote, and
//! `\uXXXX` (lowercase hex, UTF-16 code units) for everything else outside
//! `' '..='~'`.

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut units = [0u16; 2];
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            ' '..='~' => out.push(c),
            _ => {
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
    }
    out
}

/// Reverses [`escape`]. Also understands `\'`, `\b` and `\f`.
///
/// Never fails: an unknown sequence such as `\q`, a `\u` without four hex
/// digits, an unpaired surrogate or a trailing backslash is copied through
/// literally.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let Some(c) = after.chars().next() else {
            out.push('\\');
            rest = after;
            break;
        };
        let simple = match c {
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            '\\' => Some('\\'),
            '"' => Some('"'),
            '\'' => Some('\''),
            'b' => Some('\u{8}'),
            'f' => Some('\u{c}'),
            _ => None,
        };
        if let Some(s) = simple {
            out.push(s);
            rest = &after[1..];
            continue;
        }
        if c == 'u' {
            if let Some((decoded, consumed)) = unicode_escape(&after[1..]) {
                out.push(decoded);
                rest = &after[1 + consumed..];
                continue;
            }
        }
        out.push('\\');
        out.push(c);
        rest = &after[c.len_utf8()..];
    }
    out.push_str(rest);
    out
}

/// Decodes the hex digits following `\u`, joining a surrogate pair written as
/// two consecutive escapes. Returns the char and the bytes consumed.
fn unicode_escape(s: &str) -> Option<(char, usize)> {
    let high = hex_unit(s)?;
    if !(0xD800..=0xDFFF).contains(&high) {
        return char::from_u32(u32::from(high)).map(|c| (c, 4));
    }
    if high > 0xDBFF {
        return None;
    }
    let low = s[4..].strip_prefix("\\u").and_then(hex_unit)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return None;
    }
    char::decode_utf16([high, low])
        .next()?
        .ok()
        .map(|c| (c, 10))
}

fn hex_unit(s: &str) -> Option<u16> {
    let digits = s.as_bytes().get(..4)?;
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u16::from_str_radix(&s[..4], 16).ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{escape, unescape};

    #[rstest(
        input,
        expected,
        case("", ""),
        case("a\nb\"c", "a\\nb\\\"c"),
        case("tab\there\r\n", "tab\\there\\r\\n"),
        case("back\\slash", "back\\\\slash"),
        case("it's", "it's"),
        case("é", "\\u00e9"),
        case("\u{7f}\u{0}", "\\u007f\\u0000"),
        case("日本", "\\u65e5\\u672c"),
        case("😀", "\\ud83d\\ude00")
    )]
    fn test_escape(input: &str, expected: &str) {
        assert_eq!(expected, escape(input));
    }

    #[rstest(
        input,
        expected,
        case("", ""),
        case("a\\nb\\\"c", "a\nb\"c"),
        case("\\'\\b\\f\\t\\r\\\\", "'\u{8}\u{c}\t\r\\"),
        case("\\u00E9\\u00e9", "éé"),
        case("\\ud83d\\ude00!", "😀!")
    )]
    fn test_unescape(input: &str, expected: &str) {
        assert_eq!(expected, unescape(input));
    }

    #[rstest]
    #[case::unknown_sequence("\\q", "\\q")]
    #[case::unknown_non_ascii("\\é", "\\é")]
    #[case::trailing_backslash("end\\", "end\\")]
    #[case::short_unicode("\\u12", "\\u12")]
    #[case::non_hex_unicode("\\u12zz", "\\u12zz")]
    #[case::lone_high_surrogate("\\ud83dx", "\\ud83dx")]
    #[case::lone_low_surrogate("\\ude00", "\\ude00")]
    #[case::high_then_non_low("\\ud83d\\u0041", "\\ud83dA")]
    fn test_unescape_passes_unknown_through(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(expected, unescape(input));
    }
}
