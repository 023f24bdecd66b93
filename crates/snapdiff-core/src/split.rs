//! Line splitting.

/// Split `text` on `'\n'`.
///
/// Matches plain `split` semantics: `""` yields `[""]` and a trailing newline
/// yields a trailing empty line. `'\r'` is kept as line content.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn trailing_newline_yields_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn carriage_return_is_content() {
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn lone_newline() {
        assert_eq!(split_lines("\n"), vec!["", ""]);
    }
}
