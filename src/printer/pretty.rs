//! Reformat s-expression text according to its nesting depth.
use super::Layout;

/// Reformat with the default layout: a line break before every nested
/// opening paren, two spaces of indentation per level.
pub fn prettify(text: &str) -> String {
    prettify_with(text, Layout::default())
}

/// Reformat s-expression text according to `layout`.
///
/// Newlines in the input are stripped first; the layout is computed fresh
/// from the nesting structure. The content of quoted runs is otherwise
/// copied verbatim. This never fails: unbalanced parens and unterminated
/// quotes pass through as written.
pub fn prettify_with(text: &str, layout: Layout) -> String {
    let chars: Vec<char> = text.chars().filter(|&c| c != '\n').collect();
    let break_inc = layout.break_inc;

    let mut out = String::with_capacity(chars.len() * 2);
    // Count of currently open parens; goes negative on stray closers.
    let mut level: i32 = 0;
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if let Some(delimiter) = in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == delimiter {
                in_string = None;
            }
            i += 1;
            continue;
        }

        match c {
            '(' => {
                if break_inc <= 0 {
                    if !matches!(out.chars().next_back(), None | Some(' ') | Some('(')) {
                        out.push(' ');
                    }
                } else if level > 0 && level % break_inc == 0 {
                    // The break replaces any separator already emitted;
                    // re-runs over our own output stay stable this way.
                    while out.ends_with(|c: char| c.is_whitespace() && c != '\n') {
                        out.pop();
                    }
                    out.push('\n');
                    for _ in 0..(level as usize * layout.spaces_per_level) {
                        out.push(' ');
                    }
                }
                out.push('(');
                level += 1;

                // The next token starts cleanly after the paren.
                i += 1;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                continue;
            }
            ')' => {
                level -= 1;
                out.push(')');
                if break_inc <= 0 {
                    if let Some(&next) = chars.get(i + 1) {
                        if next != ')' && !next.is_whitespace() {
                            out.push(' ');
                        }
                    }
                }
                i += 1;
            }
            '\'' | '"' => {
                in_string = Some(c);
                out.push(c);
                i += 1;
            }
            c if c.is_whitespace() => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                if chars.get(j) == Some(&')') {
                    // No whitespace before a closing paren.
                } else if break_inc <= 0 {
                    if !matches!(out.chars().next_back(), None | Some(' ') | Some('(')) {
                        out.push(' ');
                    }
                } else {
                    out.push(c);
                }
                i = j;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }

    out
}
