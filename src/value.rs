//! The recursive value type produced and consumed by this crate.
use std::fmt;
use std::ops::{Index, IndexMut};

use ordered_float::OrderedFloat;
use proptest::arbitrary::Arbitrary;
use smol_str::SmolStr;

use crate::printer::{simple, Quoting};

/// An s-expression node: an integer, a float, a string, or a list of nodes.
///
/// Floats are wrapped in [`OrderedFloat`] so that whole trees can be compared
/// for structural equality, NaN included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sexp {
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(SmolStr),
    List(Vec<Sexp>),
}

impl Sexp {
    /// Classify a bare token as an integer, a float, or a string.
    ///
    /// Attempts are ordered: base-10 `i64`, then `f64`, then the token
    /// unchanged as a string. The empty token stays the empty string.
    /// This never fails; anything unparsable is a string.
    pub fn classify(token: &str) -> Sexp {
        if token.is_empty() {
            return Sexp::Str(SmolStr::default());
        }
        if let Ok(int) = token.parse::<i64>() {
            return Sexp::Int(int);
        }
        if let Ok(float) = token.parse::<f64>() {
            return Sexp::Float(OrderedFloat(float));
        }
        Sexp::Str(token.into())
    }

    /// Returns `true` if this node is a list.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Sexp::List(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Sexp::Int(int) => Some(*int),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Sexp::Float(float) => Some(float.0),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Sexp::Str(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Sexp]> {
        match self {
            Sexp::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Sexp>> {
        match self {
            Sexp::List(items) => Some(items),
            _ => None,
        }
    }

    /// The conventional tag of a list: its first element, if any.
    pub fn tag(&self) -> Option<&Sexp> {
        match self {
            Sexp::List(items) => items.first(),
            _ => None,
        }
    }

    /// Append a value to a list node. Panics when called on a non-list.
    pub fn push(&mut self, item: impl Into<Sexp>) {
        match self {
            Sexp::List(items) => items.push(item.into()),
            _ => panic!("cannot append to a non-list s-expression"),
        }
    }

    /// Append every value of an iterator to a list node.
    /// Panics when called on a non-list.
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator,
        I::Item: Into<Sexp>,
    {
        match self {
            Sexp::List(items) => items.extend(iter.into_iter().map(Into::into)),
            _ => panic!("cannot extend a non-list s-expression"),
        }
    }

    /// All matches for `matcher` anywhere in this tree, in pre-order.
    ///
    /// Shorthand for [`search`](crate::search::search) without a depth bound.
    pub fn search(&self, matcher: &crate::search::Matcher) -> Vec<(crate::search::Path, &Sexp)> {
        crate::search::search(self, matcher, None)
    }
}

/// Indexing into a list node. Panics on a non-list or out-of-range index,
/// like slice indexing.
impl Index<usize> for Sexp {
    type Output = Sexp;

    fn index(&self, index: usize) -> &Sexp {
        match self {
            Sexp::List(items) => &items[index],
            _ => panic!("cannot index into a non-list s-expression"),
        }
    }
}

impl IndexMut<usize> for Sexp {
    fn index_mut(&mut self, index: usize) -> &mut Sexp {
        match self {
            Sexp::List(items) => &mut items[index],
            _ => panic!("cannot index into a non-list s-expression"),
        }
    }
}

impl From<i64> for Sexp {
    fn from(value: i64) -> Self {
        Sexp::Int(value)
    }
}

impl From<i32> for Sexp {
    fn from(value: i32) -> Self {
        Sexp::Int(value.into())
    }
}

impl From<f64> for Sexp {
    fn from(value: f64) -> Self {
        Sexp::Float(OrderedFloat(value))
    }
}

impl From<SmolStr> for Sexp {
    fn from(value: SmolStr) -> Self {
        Sexp::Str(value)
    }
}

impl From<&str> for Sexp {
    fn from(value: &str) -> Self {
        Sexp::Str(value.into())
    }
}

impl From<String> for Sexp {
    fn from(value: String) -> Self {
        Sexp::Str(value.into())
    }
}

impl<T: Into<Sexp>> From<Vec<T>> for Sexp {
    fn from(values: Vec<T>) -> Self {
        Sexp::List(values.into_iter().map(Into::into).collect())
    }
}

/// Scalars display as their bare textual form; lists display flat with
/// default quoting. Floats keep a fractional part (`42.0`, not `42`) so
/// their text re-classifies as a float.
impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Int(int) => write!(f, "{}", int),
            Sexp::Float(float) => write!(f, "{:?}", float.0),
            Sexp::Str(string) => f.write_str(string),
            Sexp::List(_) => f.write_str(&simple::unformatted(self, Quoting::default())),
        }
    }
}

impl Arbitrary for Sexp {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        let leaf = proptest::prop_oneof![
            any::<i64>().prop_map(Sexp::Int),
            any::<OrderedFloat<f64>>().prop_map(Sexp::Float),
            any::<String>().prop_map(Sexp::from),
        ];
        leaf.prop_recursive(8, 256, 10, |inner| {
            proptest::collection::vec(inner, 0..10).prop_map(Sexp::List)
        })
        .boxed()
    }
}

#[cfg(test)]
mod test {
    use super::Sexp;
    use crate::parser::from_str;
    use crate::printer::{to_string_with, Layout, Quoting};
    use ordered_float::OrderedFloat;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", Sexp::Int(42))]
    #[case("-17", Sexp::Int(-17))]
    #[case("+5", Sexp::Int(5))]
    #[case("3.14", Sexp::from(3.14))]
    #[case("-2.5", Sexp::from(-2.5))]
    #[case("1e3", Sexp::from(1000.0))]
    #[case(".5", Sexp::from(0.5))]
    #[case("hello", Sexp::from("hello"))]
    #[case("", Sexp::from(""))]
    #[case("0x1a", Sexp::from("0x1a"))]
    #[case("1.2.3", Sexp::from("1.2.3"))]
    #[case("42x", Sexp::from("42x"))]
    fn classify(#[case] token: &str, #[case] expected: Sexp) {
        assert_eq!(expected, Sexp::classify(token));
    }

    #[test]
    fn classify_overflowing_int_becomes_float() {
        let huge = "99999999999999999999";
        assert_eq!(Sexp::from(1e20), Sexp::classify(huge));
    }

    #[test]
    fn push_and_index_normalize_inserted_values() {
        let mut tree = Sexp::List(vec![Sexp::from("pad")]);
        tree.push(1);
        tree.push(vec![Sexp::from("at"), Sexp::from(0.5)]);
        assert_eq!(Sexp::Int(1), tree[1]);
        assert_eq!(Sexp::from("at"), tree[2][0]);

        tree[1] = Sexp::Int(7);
        assert_eq!(Some(7), tree[1].as_int());

        tree.extend(vec![2, 3]);
        assert_eq!(5, tree.as_list().map(<[Sexp]>::len).unwrap_or(0));
    }

    #[test]
    fn accessors_narrow_by_variant() {
        let mut tree = crate::parser::from_str("(pad 1 (at 1.5 2.5))").unwrap();
        assert!(tree.is_list());
        assert_eq!(Some(&Sexp::from("pad")), tree.tag());
        assert_eq!(Some("pad"), tree[0].as_str());
        assert_eq!(Some(1), tree[1].as_int());
        assert_eq!(Some(1.5), tree[2][1].as_float());
        assert_eq!(None, tree[1].as_str());
        assert_eq!(None, tree.as_int());

        if let Some(items) = tree.as_list_mut() {
            items.truncate(2);
        }
        assert_eq!(Some(2), tree.as_list().map(<[Sexp]>::len));
    }

    #[test]
    fn display_keeps_float_reparseable() {
        assert_eq!("42.0", Sexp::from(42.0).to_string());
        assert_eq!("2.5", Sexp::from(2.5).to_string());
        assert_eq!("-7", Sexp::Int(-7).to_string());
        assert_eq!("pad", Sexp::from("pad").to_string());
    }

    #[test]
    fn float_equality_is_total() {
        assert_eq!(Sexp::from(f64::NAN), Sexp::from(f64::NAN));
        assert_eq!(Sexp::Float(OrderedFloat(1.5)), Sexp::from(1.5));
    }

    /// Strings that survive a bare round through the tokenizer: no
    /// whitespace, quotes, parens, or backslashes, and nothing the
    /// classifier would turn into a number.
    fn symbolish() -> impl Strategy<Value = Sexp> {
        "[A-Za-z_+*/<>=?.!-]{1,12}"
            .prop_filter("token must classify as a string", |s| {
                matches!(Sexp::classify(s), Sexp::Str(_))
            })
            .prop_map(Sexp::from)
    }

    /// Trees whose scalars all carry their type through serialize + parse.
    fn faithful_tree() -> impl Strategy<Value = Sexp> {
        let leaf = proptest::prop_oneof![
            any::<i64>().prop_map(Sexp::Int),
            any::<f64>().prop_map(Sexp::from),
            symbolish(),
        ];
        leaf.prop_recursive(6, 64, 8, |inner| {
            proptest::collection::vec(inner, 0..8).prop_map(Sexp::List)
        })
    }

    proptest! {
        #[test]
        fn print_then_parse(
            value in faithful_tree(),
            break_inc in -1i32..=3,
            spaces_per_level in 0usize..4,
        ) {
            let quoting = Quoting { numbers: false, strings: true };
            let layout = Layout { break_inc, spaces_per_level };
            let text = to_string_with(&value, quoting, layout);
            let parsed = from_str(&text).unwrap();
            prop_assert_eq!(value, parsed);
        }

        #[test]
        fn default_quoting_round_trips_structure(value in faithful_tree()) {
            let text = crate::printer::to_string(&value);
            // Quoted numbers come back as strings, but nesting and order
            // survive any quoting configuration.
            let parsed = from_str(&text).unwrap();
            prop_assert_eq!(shape(&value), shape(&parsed));
        }
    }

    fn shape(value: &Sexp) -> String {
        match value {
            Sexp::List(items) => {
                let inner: Vec<String> = items.iter().map(shape).collect();
                format!("({})", inner.join(" "))
            }
            _ => ".".to_string(),
        }
    }
}
