use logos::Logos;

use crate::escape::unescape;
use crate::parser::{Span, Token};
use crate::value::Sexp;

/// Token classes over raw s-expression text.
///
/// Bare tokens may carry backslash-escaped pairs (including an escaped
/// space or paren) and a dangling final backslash; quote characters only
/// delimit a run when they are not part of such a pair. Together the
/// classes cover every character, so the sole lexical failure is a quoted
/// run that never closes.
#[derive(Debug, Clone, PartialEq, Logos)]
#[logos(skip r"[ \t\n\r\f]+")]
enum LexerToken {
    #[token("(")]
    Open,

    #[token(")")]
    Close,

    #[regex(r#"([^ \t\n\r\f()'"\\]|\\(.|\n))+\\?|\\"#)]
    Bare,

    #[regex(r#"'([^'\\]|\\(.|\n))*'"#)]
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    Quoted,

    #[regex(r#"'([^'\\]|\\(.|\n))*"#)]
    #[regex(r#""([^"\\]|\\(.|\n))*"#)]
    Unterminated,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum LexError {
    #[error("unterminated quote")]
    UnterminatedQuote(Span),
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedQuote(span) => span.clone(),
        }
    }
}

/// Lex a source string into structural and scalar tokens.
///
/// Bare tokens are classified into int/float/string scalars here; quoted
/// runs become string scalars with their escapes resolved and are never
/// reclassified.
pub(crate) fn lex(str: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = LexerToken::lexer(str);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();

        match token {
            Ok(LexerToken::Open) => tokens.push(Token::Open),
            Ok(LexerToken::Close) => tokens.push(Token::Close),
            Ok(LexerToken::Bare) => {
                tokens.push(Token::Scalar(Sexp::classify(lexer.slice())));
            }
            Ok(LexerToken::Quoted) => {
                let slice = lexer.slice();
                let inner = &slice[1..slice.len() - 1];
                tokens.push(Token::Scalar(Sexp::Str(unescape(inner).into())));
            }
            Ok(LexerToken::Unterminated) | Err(()) => {
                return Err(LexError::UnterminatedQuote(span.start..str.len()));
            }
        }
    }

    Ok(tokens)
}
