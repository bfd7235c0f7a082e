use std::fs;
use std::io::{self, Read};

use crate::error::Result;

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Read UTF-8 text input, dropping one trailing line break.
pub(crate) fn read_text(file: Option<&str>) -> Result<String> {
    let text = String::from_utf8(read_input(file)?)?;
    Ok(strip_line_break(text))
}

fn strip_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::strip_line_break;

    #[rstest(
        input,
        expected,
        case("", ""),
        case("line", "line"),
        case("line\n", "line"),
        case("line\r\n", "line"),
        case("line\n\n", "line\n"),
        case("line\r", "line\r")
    )]
    fn test_strip_line_break(input: &str, expected: &str) {
        assert_eq!(expected, strip_line_break(input.to_string()));
    }
}
