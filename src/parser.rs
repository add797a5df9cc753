//! Parse s-expression text into trees.
use std::fmt::Display;
use std::ops::Range;

use crate::lexer::lex;
use crate::value::Sexp;

/// A lexed token handed to the tree builder.
#[derive(Debug, Clone)]
pub(crate) enum Token {
    Open,
    Close,
    Scalar(Sexp),
}

/// Span within a string.
pub type Span = Range<usize>;

/// A parse error.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    span: Span,
}

impl ParseError {
    pub fn new(message: impl Display, span: Span) -> Self {
        ParseError {
            message: message.to_string(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }
}

/// Shorthand for a result specialised to parse errors.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Parse s-expression text into a [`Sexp`] tree.
///
/// The input may hold a single form, several top-level forms (which come
/// back wrapped in one list), or a bare scalar. Parsing is lenient about
/// parentheses: a stray `)` is ignored and a list left open simply ends
/// where the input ends. The only fatal condition is a quote that never
/// closes.
pub fn from_str(source: &str) -> Result<Sexp> {
    let tokens = lex(source).map_err(|err| ParseError::new(&err, err.span()))?;

    // Stack of in-progress lists; the synthetic root sits at the bottom
    // and the top is the list new elements attach to.
    let mut stack: Vec<Vec<Sexp>> = vec![Vec::new()];

    for token in tokens {
        match token {
            Token::Open => stack.push(Vec::new()),
            Token::Close => {
                // Never pop the synthetic root.
                if stack.len() > 1 {
                    if let Some(done) = stack.pop() {
                        if let Some(parent) = stack.last_mut() {
                            parent.push(Sexp::List(done));
                        }
                    }
                }
            }
            Token::Scalar(scalar) => {
                if let Some(active) = stack.last_mut() {
                    active.push(scalar);
                }
            }
        }
    }

    // Lists still open at end of input close there.
    while stack.len() > 1 {
        if let Some(done) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.push(Sexp::List(done));
            }
        }
    }

    let mut top = stack.pop().unwrap_or_default();
    if top.len() == 1 {
        return Ok(top.remove(0));
    }
    Ok(Sexp::List(top))
}

impl std::str::FromStr for Sexp {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self> {
        from_str(source)
    }
}
