//! Render trees back into s-expression text.
mod pretty;
pub(crate) mod simple;

pub use pretty::{prettify, prettify_with};

use crate::value::Sexp;

/// Which scalar elements the serializer wraps in double quotes.
///
/// The head of a list is never quoted regardless of these switches, and an
/// element whose text already begins and ends with the same quote
/// character is emitted untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quoting {
    /// Wrap integer and float elements.
    pub numbers: bool,
    /// Wrap string elements.
    pub strings: bool,
}

impl Default for Quoting {
    fn default() -> Self {
        Quoting {
            numbers: true,
            strings: true,
        }
    }
}

/// Layout configuration for the pretty-printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Break before an opening paren at every nesting level that is a
    /// positive multiple of this value. Zero or negative collapses the
    /// whole expression onto a single line.
    pub break_inc: i32,
    /// Indentation per nesting level, effective only when `break_inc` is
    /// positive.
    pub spaces_per_level: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            break_inc: 1,
            spaces_per_level: 2,
        }
    }
}

impl Layout {
    /// Single-line layout: no newlines, one space between tokens.
    pub fn inline() -> Self {
        Layout {
            break_inc: 0,
            spaces_per_level: 2,
        }
    }
}

/// Render a tree with default quoting and layout.
pub fn to_string(value: &Sexp) -> String {
    to_string_with(value, Quoting::default(), Layout::default())
}

/// Render a tree, quoting elements per `quoting` and reformatting the
/// result per `layout`. A scalar at the root renders as its bare text and
/// skips reformatting.
pub fn to_string_with(value: &Sexp, quoting: Quoting, layout: Layout) -> String {
    let flat = simple::unformatted(value, quoting);
    if value.is_list() {
        pretty::prettify_with(&flat, layout)
    } else {
        flat
    }
}
