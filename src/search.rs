//! Structural queries over parsed trees.
//!
//! A [`Matcher`] couples a match strategy with its pattern; [`search`]
//! walks a tree in pre-order and returns every list node the matcher
//! accepts, together with the index path that addresses it.
use std::fmt;

use regex::Regex;
use smol_str::SmolStr;

use crate::value::Sexp;

/// Child indices addressing a node from the root; empty for the root.
pub type Path = Vec<usize>;

/// A match strategy together with its pattern.
///
/// Plain strings convert into [`Matcher::KeyPath`], compiled regexes into
/// [`Matcher::Regex`], index vectors into [`Matcher::Path`], and values
/// into [`Matcher::Value`], so callers can pass patterns directly where a
/// `Matcher` is built via `into`.
pub enum Matcher {
    /// Slash-delimited sequence of list tags. With a leading `/` the
    /// whole tag path from the root must match; otherwise any trailing
    /// run of tags may.
    KeyPath(String),
    /// The list's first element equals the pattern.
    Value(Sexp),
    /// The list's first element is a string equal to the pattern,
    /// ASCII-case-insensitively.
    FirstValue(SmolStr),
    /// Some direct element of the list equals the pattern.
    Contains(Sexp),
    /// A caller-supplied predicate over the list's elements.
    Predicate(Box<dyn Fn(&[Sexp]) -> bool>),
    /// The list's first element is a string the regex finds a match in.
    Regex(Regex),
    /// The node's index path equals the pattern.
    Path(Vec<usize>),
}

impl Matcher {
    pub fn key_path(pattern: impl Into<String>) -> Self {
        Matcher::KeyPath(pattern.into())
    }

    pub fn value(value: impl Into<Sexp>) -> Self {
        Matcher::Value(value.into())
    }

    pub fn first_value(value: impl Into<SmolStr>) -> Self {
        Matcher::FirstValue(value.into())
    }

    pub fn contains(value: impl Into<Sexp>) -> Self {
        Matcher::Contains(value.into())
    }

    pub fn predicate(predicate: impl Fn(&[Sexp]) -> bool + 'static) -> Self {
        Matcher::Predicate(Box::new(predicate))
    }

    /// Compile `pattern` into a regex matcher. A malformed pattern is the
    /// caller's problem and comes back as the compile error.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Matcher::Regex(Regex::new(pattern)?))
    }

    pub fn path(path: impl Into<Vec<usize>>) -> Self {
        Matcher::Path(path.into())
    }

    /// Test one non-empty list. Returns whether it matches and whether
    /// traversal continues into its children.
    fn evaluate(&self, items: &[Sexp], path: &[usize], key_path: &[String]) -> (bool, bool) {
        match self {
            Matcher::KeyPath(pattern) => {
                let parts: Vec<&str> = pattern.trim_matches('/').split('/').collect();
                if pattern.starts_with('/') {
                    let agree = key_path
                        .iter()
                        .zip(parts.iter())
                        .all(|(key, part)| key.as_str() == *part);
                    (
                        agree && key_path.len() == parts.len(),
                        agree && key_path.len() < parts.len(),
                    )
                } else {
                    let matched = key_path.len() >= parts.len()
                        && key_path[key_path.len() - parts.len()..]
                            .iter()
                            .zip(parts.iter())
                            .all(|(key, part)| key.as_str() == *part);
                    (matched, true)
                }
            }
            Matcher::Value(value) => (items.first() == Some(value), true),
            Matcher::FirstValue(pattern) => (
                matches!(items.first(), Some(Sexp::Str(head))
                    if head.eq_ignore_ascii_case(pattern.as_str())),
                true,
            ),
            Matcher::Contains(value) => (items.contains(value), true),
            Matcher::Predicate(predicate) => (predicate(items), true),
            Matcher::Regex(regex) => (
                matches!(items.first(), Some(Sexp::Str(head)) if regex.is_match(head)),
                true,
            ),
            Matcher::Path(pattern) => (path == pattern.as_slice(), true),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::KeyPath(pattern) => f.debug_tuple("KeyPath").field(pattern).finish(),
            Matcher::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Matcher::FirstValue(value) => f.debug_tuple("FirstValue").field(value).finish(),
            Matcher::Contains(value) => f.debug_tuple("Contains").field(value).finish(),
            Matcher::Predicate(_) => f.write_str("Predicate(..)"),
            Matcher::Regex(regex) => f.debug_tuple("Regex").field(&regex.as_str()).finish(),
            Matcher::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

impl From<&str> for Matcher {
    fn from(pattern: &str) -> Self {
        Matcher::KeyPath(pattern.to_string())
    }
}

impl From<String> for Matcher {
    fn from(pattern: String) -> Self {
        Matcher::KeyPath(pattern)
    }
}

impl From<Regex> for Matcher {
    fn from(regex: Regex) -> Self {
        Matcher::Regex(regex)
    }
}

impl From<Vec<usize>> for Matcher {
    fn from(path: Vec<usize>) -> Self {
        Matcher::Path(path)
    }
}

impl From<i64> for Matcher {
    fn from(value: i64) -> Self {
        Matcher::Value(Sexp::Int(value))
    }
}

impl From<f64> for Matcher {
    fn from(value: f64) -> Self {
        Matcher::Value(value.into())
    }
}

impl From<Sexp> for Matcher {
    fn from(value: Sexp) -> Self {
        Matcher::Value(value)
    }
}

/// Find every list node the matcher accepts, in pre-order.
///
/// Only list nodes are candidates; empty lists and scalars never match.
/// Nodes whose path length reaches `max_depth` are neither examined nor
/// entered. The result pairs each match's index path with the matched
/// subtree, parents before children.
pub fn search<'tree>(
    root: &'tree Sexp,
    matcher: &Matcher,
    max_depth: Option<usize>,
) -> Vec<(Path, &'tree Sexp)> {
    let mut matches = Vec::new();
    let mut path = Vec::new();
    let mut key_path = Vec::new();
    visit(root, matcher, max_depth, &mut path, &mut key_path, &mut matches);
    matches
}

fn visit<'tree>(
    node: &'tree Sexp,
    matcher: &Matcher,
    max_depth: Option<usize>,
    path: &mut Path,
    key_path: &mut Vec<String>,
    matches: &mut Vec<(Path, &'tree Sexp)>,
) {
    if max_depth.is_some_and(|limit| path.len() >= limit) {
        return;
    }
    let Sexp::List(items) = node else { return };
    let Some(head) = items.first() else { return };

    key_path.push(head.to_string());

    let (matched, descend) = matcher.evaluate(items, path, key_path);
    if matched {
        matches.push((path.clone(), node));
    }
    if descend {
        for (index, child) in items.iter().enumerate() {
            if child.is_list() {
                path.push(index);
                visit(child, matcher, max_depth, path, key_path, matches);
                path.pop();
            }
        }
    }

    key_path.pop();
}
