use crate::escape::escape_string;
use crate::value::Sexp;

use super::Quoting;

/// Render a tree flat: elements separated by single spaces, no line
/// breaks. The head of each list keeps its bare text; every later scalar
/// is quoted according to `quoting`.
pub(crate) fn unformatted(value: &Sexp, quoting: Quoting) -> String {
    match value {
        Sexp::List(items) => {
            if items.is_empty() {
                return "()".to_string();
            }

            let mut elements = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                if item.is_list() {
                    elements.push(unformatted(item, quoting));
                } else {
                    elements.push(element(item, quoting, index == 0));
                }
            }
            format!("({})", elements.join(" "))
        }
        scalar => scalar.to_string(),
    }
}

fn element(item: &Sexp, quoting: Quoting, is_head: bool) -> String {
    let text = item.to_string();
    if is_head {
        return text;
    }

    let wrap = match item {
        Sexp::Int(_) | Sexp::Float(_) => quoting.numbers,
        _ => quoting.strings,
    };

    if wrap && !quote_delimited(&text) {
        escape_string(&text)
    } else {
        text
    }
}

/// True when the text already starts and ends with the same quote
/// character. A text of a single quote character does not count; wrapping
/// it is the only way it can survive a re-parse.
fn quote_delimited(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => first == last && (first == '"' || first == '\''),
        _ => false,
    }
}
