//! CSV field quoting (RFC 4180).

/// Wraps `text` in double quotes and doubles every quote inside it.
/// Empty text stays empty.
pub fn escape(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Strips one layer of surrounding quotes and un-doubles the quotes inside.
/// Text that is not wrapped in quotes is returned unchanged.
pub fn unescape(text: &str) -> String {
    match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(inner) => inner.replace("\"\"", "\""),
        None => text.to_string(),
    }
}
