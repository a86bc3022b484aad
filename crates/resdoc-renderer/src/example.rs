//! Example source reformatting.

use crate::error::RenderError;

/// Normalize an example source block for embedding in a document.
///
/// The first line is a structural header (typically the remainder of the
/// line holding the opening tag) and is dropped. The second line sets the
/// baseline: its leading whitespace is stripped and its width `w` is removed
/// from every later line longer than `w` characters. Shorter lines, such as
/// blank lines or an outdented closing brace, are kept as they are.
///
/// # Errors
///
/// Returns [`RenderError::MalformedExample`] when the source has fewer than
/// two lines.
///
/// # Examples
///
/// ```
/// use resdoc_renderer::reformat;
///
/// let lines = reformat("{\n    foo = 1\n    bar = 2\n  }").unwrap();
/// assert_eq!(lines, ["foo = 1", "bar = 2", "  }"]);
/// ```
pub fn reformat(text: &str) -> Result<Vec<&str>, RenderError> {
    let lines: Vec<&str> = text.lines().collect();
    let (baseline, rest) = match lines.as_slice() {
        [_, baseline, rest @ ..] => (*baseline, rest),
        _ => return Err(RenderError::MalformedExample { lines: lines.len() }),
    };

    let unindented = baseline.trim_start();
    let width = baseline.chars().count() - unindented.chars().count();

    let mut output = Vec::with_capacity(lines.len() - 1);
    output.push(unindented);
    output.extend(rest.iter().map(|&line| strip_indent(line, width)));
    Ok(output)
}

/// Remove the first `width` characters when the line is longer than that.
fn strip_indent(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((offset, _)) => &line[offset..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shorter_lines_kept_unchanged() {
        let lines = reformat("{\n    foo = 1\n    bar = 2\n  }").unwrap();
        assert_eq!(lines, vec!["foo = 1", "bar = 2", "  }"]);
    }

    #[test]
    fn test_two_lines_yield_one() {
        let lines = reformat("header\n      only = true").unwrap();
        assert_eq!(lines, vec!["only = true"]);
    }

    #[test]
    fn test_nested_indentation_preserved() {
        let text = "\n  resource \"x\" \"y\" {\n    name = \"n\"\n    tags {\n      a = 1\n    }\n  }\n";
        let lines = reformat(text).unwrap();
        assert_eq!(
            lines,
            vec![
                "resource \"x\" \"y\" {",
                "  name = \"n\"",
                "  tags {",
                "    a = 1",
                "  }",
                "}",
            ]
        );
    }

    #[test]
    fn test_blank_lines_kept() {
        let lines = reformat("\n    a\n\n    b").unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_line_of_exact_width_kept() {
        let lines = reformat("\n    a\n    ").unwrap();
        assert_eq!(lines, vec!["a", "    "]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines = reformat("{\r\n  a\r\n  b\r\n").unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_width_counted_in_characters() {
        let lines = reformat("\n\u{3000}a\n\u{3000}b\nc").unwrap();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fewer_than_two_lines_fails() {
        let err = reformat("single line").unwrap_err();
        assert!(matches!(err, RenderError::MalformedExample { lines: 1 }));

        let err = reformat("").unwrap_err();
        assert!(matches!(err, RenderError::MalformedExample { lines: 0 }));
    }
}
