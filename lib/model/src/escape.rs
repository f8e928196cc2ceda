use crate::MalformedEscapeError;
use std::fmt::Write;

/// Returns `text` as a double-quoted SPARQL string literal.
///
/// NUL characters are dropped as most stores refuse them. Characters outside of the printable
/// ASCII range are written as `\uXXXX` escapes of their UTF-16 code units, so a character outside
/// of the BMP is written as a surrogate pair.
///
/// ```
/// use sparql_client_model::escape_for_query;
///
/// assert_eq!(escape_for_query("a\tb"), r#""a\tb""#);
/// assert_eq!(escape_for_query("caf\u{e9}"), r#""caf\u00e9""#);
/// ```
pub fn escape_for_query(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for c in text.chars() {
        match c {
            '\0' => (),
            '\\' | '"' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\u{8}' => result.push_str("\\b"),
            '\t' => result.push_str("\\t"),
            '\u{c}' => result.push_str("\\f"),
            ' '..='\u{7f}' => result.push(c),
            _ => {
                let mut units = [0; 2];
                for unit in c.encode_utf16(&mut units) {
                    // Writing into a String never fails
                    let _ = write!(result, "\\u{unit:04x}");
                }
            }
        }
    }
    result.push('"');
    result
}

/// Reverts the backslash escaping applied by endpoints to literals in TSV results.
///
/// Only `\\`, `\"`, `\r`, `\t` and `\n` are recognized. A backslash at the very end of the input
/// escapes nothing and is dropped.
pub fn unescape_tsv_literal(literal: &str) -> Result<String, MalformedEscapeError> {
    let mut result = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some(_) => {
                return Err(MalformedEscapeError {
                    literal: literal.to_owned(),
                })
            }
            None => (),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_plain_ascii() {
        assert_eq!(escape_for_query("hello world"), "\"hello world\"");
        assert_eq!(escape_for_query(""), "\"\"");
    }

    #[test]
    fn escape_quotes_and_backslashes() {
        assert_eq!(escape_for_query(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn escape_control_characters() {
        assert_eq!(
            escape_for_query("a\nb\rc\u{8}d\te\u{c}f"),
            r#""a\nb\rc\bd\te\ff""#
        );
        assert_eq!(escape_for_query("\u{1}\u{1f}"), r#""\u0001\u001f""#);
    }

    #[test]
    fn escape_drops_nul() {
        assert_eq!(escape_for_query("a\0b\0"), "\"ab\"");
    }

    #[test]
    fn escape_keeps_delete_character() {
        assert_eq!(escape_for_query("\u{7f}"), "\"\u{7f}\"");
    }

    #[test]
    fn escape_non_ascii() {
        assert_eq!(escape_for_query("\u{80}"), r#""\u0080""#);
        assert_eq!(escape_for_query("\u{2603}"), r#""\u2603""#);
        assert_eq!(escape_for_query("\u{1f600}"), r#""\ud83d\ude00""#);
    }

    #[test]
    fn unescape_known_sequences() -> Result<(), MalformedEscapeError> {
        assert_eq!(
            unescape_tsv_literal(r#"a\\b\"c\rd\te\nf"#)?,
            "a\\b\"c\rd\te\nf"
        );
        assert_eq!(unescape_tsv_literal("no escapes")?, "no escapes");
        Ok(())
    }

    #[test]
    fn unescape_rejects_unknown_sequence() {
        assert_eq!(
            unescape_tsv_literal(r"tab\x"),
            Err(MalformedEscapeError {
                literal: r"tab\x".to_owned()
            })
        );
        assert!(unescape_tsv_literal(r"\b").is_err());
        assert!(unescape_tsv_literal(r"\u0041").is_err());
    }

    #[test]
    fn unescape_drops_trailing_backslash() -> Result<(), MalformedEscapeError> {
        assert_eq!(unescape_tsv_literal("abc\\")?, "abc");
        Ok(())
    }
}
