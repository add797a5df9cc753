use logos::Logos;

/// Lexer token for the body of a quoted run.
///
/// Only quote characters and the backslash itself have escaped forms; any
/// other backslash pair is carried through verbatim, backslash included.
#[derive(Debug, Clone, Logos)]
enum EscapedToken {
    #[token(r#"\'"#, |_| '\'', priority = 3)]
    #[token(r#"\""#, |_| '"', priority = 3)]
    #[token(r#"\\"#, |_| '\\', priority = 3)]
    Escaped(char),

    #[regex(r#"\\(.|\n)"#, priority = 2)]
    Verbatim,

    #[regex(r#"[^\\]"#)]
    Literal,
}

/// Replaces escaped quote characters and backslashes with their literal
/// forms, leaving every other escape sequence untouched.
pub(crate) fn unescape(str: &str) -> String {
    let mut lexer = EscapedToken::lexer(str);
    let mut output = String::with_capacity(str.len());

    while let Some(token) = lexer.next() {
        match token {
            Ok(EscapedToken::Escaped(c)) => output.push(c),
            // Verbatim pairs, plain characters, and a dangling final
            // backslash all pass through unchanged.
            _ => output.push_str(lexer.slice()),
        }
    }

    output
}

/// Wraps a string in double quotes, escaping embedded quotes and
/// backslashes so the result lexes back to the same content.
pub(crate) fn escape_string(str: &str) -> String {
    let mut output = String::with_capacity(str.len() + 2);
    output.push('"');

    for c in str.chars() {
        match c {
            '"' => output.push_str(r#"\""#),
            '\\' => output.push_str(r"\\"),
            c => output.push(c),
        }
    }

    output.push('"');
    output
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape};
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case(r#"Hello \"world\""#, r#"Hello "world""#)]
    #[case(r"Hello \'world\'", "Hello 'world'")]
    #[case(r"a\\b", r"a\b")]
    #[case(r"a\nb", r"a\nb")]
    #[case(r"a\tb", r"a\tb")]
    #[case("", "")]
    fn test_unescape(#[case] escaped: &str, #[case] expected: &str) {
        assert_eq!(expected, unescape(escaped));
    }

    #[rstest]
    #[case("plain", r#""plain""#)]
    #[case(r#"say "hi""#, r#""say \"hi\"""#)]
    #[case(r"a\b", r#""a\\b""#)]
    #[case("", r#""""#)]
    fn test_escape_string(#[case] string: &str, #[case] expected: &str) {
        assert_eq!(expected, escape_string(string));
    }

    #[rstest]
    #[case("with space")]
    #[case(r#"mixed " and ' quotes"#)]
    fn escape_then_unescape(#[case] string: &str) {
        let wrapped = escape_string(string);
        let inner = &wrapped[1..wrapped.len() - 1];
        assert_eq!(string, unescape(inner));
    }
}
