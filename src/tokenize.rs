//! Row tokenization: raw text lines into ordered cell strings
//!
//! Splitting is plain split-on-delimiter. The only quoting support is
//! stripping a single pair of double quotes that wraps a whole field; there
//! is no RFC-4180 escaping, no embedded delimiters inside quotes.

/// Split one line into cell strings on every occurrence of `delimiter`.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|field| strip_wrapping_quotes(field).to_string())
        .collect()
}

/// Tokenize a whole decoded input into rows.
///
/// Lines are split on `\n` with a trailing `\r` removed (CRLF input), and
/// blank lines are skipped.
pub fn tokenize(text: &str, delimiter: char) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_line(line, delimiter))
        .collect()
}

/// Strip exactly one pair of matching double quotes wrapping the field.
fn strip_wrapping_quotes(field: &str) -> &str {
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        &field[1..field.len() - 1]
    } else {
        field
    }
}
