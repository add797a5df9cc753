//! S-expressions as nested typed values.
//!
//! This crate parses the parenthesized, whitespace-delimited trees used by
//! Lisp dialects and CAD formats such as KiCad into a recursive [`Sexp`]
//! value, renders such values back into text, reformats s-expression text
//! by nesting depth, and runs structural queries over parsed trees.
//!
//! # Syntax
//!
//! - **Lists** are sequences of values delimited by `(` and `)` and
//!   separated by whitespace.
//!
//! - **Bare atoms** are runs of non-delimiter characters. Each one is
//!   classified on the way in: first as a base-10 integer, then as a
//!   float, and failing both it stays a string. A backslash glues the
//!   following character into the atom, so `a\ b` is a single atom.
//!
//! - **Quoted atoms** are runs enclosed in `'` or `"`. They are always
//!   strings, never reclassified. Within a quoted run `\'`, `\"` and `\\`
//!   stand for the quote characters and the backslash; any other escape
//!   sequence is kept verbatim, backslash included.
//!
//! Parsing is deliberately lenient about parentheses: a stray `)` is
//! ignored and an unclosed `(` ends at the end of input. The one fatal
//! condition is a quoted run that never closes. Input holding several
//! top-level forms parses into a single list of those forms.
pub(crate) mod escape;
pub(crate) mod lexer;
pub mod parser;
pub mod printer;
pub mod search;
pub mod value;

pub use parser::{from_str, ParseError};
pub use printer::{prettify, prettify_with, to_string, to_string_with, Layout, Quoting};
pub use search::{search, Matcher, Path};
pub use value::Sexp;
