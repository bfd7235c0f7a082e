//! HTML and XML entity escaping.
//!
//! Both dialects escape the same five reserved characters. They differ in the
//! apostrophe (`&#39;` for HTML, `&apos;` for XML) and in the named references
//! understood when unescaping: the HTML5 entity table for HTML, the five
//! predefined entities for XML. Decimal and hexadecimal character references
//! work in both. A reference that cannot be resolved is kept verbatim.

use quick_xml::escape::{resolve_html5_entity, resolve_xml_entity};

// "CounterClockwiseContourIntegral" is the longest HTML5 entity name
const MAX_REFERENCE_LEN: usize = 32;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_xml(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

pub fn unescape_html(text: &str) -> String {
    unescape_references(text, resolve_html5_entity)
}

pub fn unescape_xml(text: &str) -> String {
    unescape_references(text, resolve_xml_entity)
}

fn unescape_references<F>(text: &str, resolve_named: F) -> String
where
    F: Fn(&str) -> Option<&'static str>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .bytes()
            .take(MAX_REFERENCE_LEN)
            .position(|b| b == b';');
        if let Some(end) = end {
            if let Some(resolved) = resolve_reference(&after[..end], &resolve_named) {
                out.push_str(&resolved);
                rest = &after[end + 1..];
                continue;
            }
        }
        out.push('&');
        rest = after;
    }
    out.push_str(rest);
    out
}

fn resolve_reference<F>(name: &str, resolve_named: &F) -> Option<String>
where
    F: Fn(&str) -> Option<&'static str>,
{
    match name.strip_prefix('#') {
        Some(number) => {
            let (digits, radix) = match number.strip_prefix(['x', 'X']) {
                Some(hex) => (hex, 16),
                None => (number, 10),
            };
            // from_str_radix would also take a sign
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            let code = u32::from_str_radix(digits, radix).ok()?;
            char::from_u32(code).map(String::from)
        }
        None => resolve_named(name).map(str::to_string),
    }
}
