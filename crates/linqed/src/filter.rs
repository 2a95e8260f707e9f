//! Filter arguments for collection operations.
//!
//! Every query operation takes a [`Filter`] whose *kind* selects what the
//! operation does. The kind is decided by the runtime type of the value the
//! caller passes, not by a flag: a number compares by strict equality, a
//! closure is called per element, a list is treated as a set of candidates.
//!
//! | Kind | Built from |
//! |------|------------|
//! | `Absent` | [`Filter::Absent`], `None` |
//! | `Null` | [`Filter::Null`], `Element::Null` |
//! | `Value` | `bool`, numbers, `&str`, `String` |
//! | `Predicate` | [`Filter::from_fn`] |
//! | `Collection` | [`Collection`], [`List`], `Vec<T>` |
//! | `Record` | [`Record`] |
//!
//! A string value doubles as a field name for the operations that project a
//! named attribute (`distinct` and `join`). [`Filter::key`] reads better at
//! those call sites but builds the same filter.

use std::fmt;
use std::rc::Rc;

use crate::collection::Collection;
use crate::element::{Element, List, Record};

/// A primitive filter value compared by strict equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// String value, or a field name for keyed operations.
    String(String),
}

impl Primitive {
    /// Converts the primitive into the element it compares against.
    pub fn to_element(&self) -> Element {
        match self {
            Primitive::Bool(b) => Element::Bool(*b),
            Primitive::Number(n) => Element::Number(*n),
            Primitive::String(s) => Element::String(s.clone()),
        }
    }
}

/// A function applied to each element.
///
/// Selection operations read the result for truthiness; projection and
/// aggregate operations use the returned element itself.
#[derive(Clone)]
pub struct Predicate(Rc<dyn Fn(&Element) -> Element>);

impl Predicate {
    /// Wraps a closure returning anything convertible to an [`Element`].
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&Element) -> R + 'static,
        R: Into<Element>,
    {
        Predicate(Rc::new(move |element| f(element).into()))
    }

    /// Calls the predicate and returns its raw result.
    pub fn call(&self, element: &Element) -> Element {
        (self.0)(element)
    }

    /// Calls the predicate and reports whether its result is truthy.
    pub fn test(&self, element: &Element) -> bool {
        self.call(element).is_truthy()
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// The polymorphic argument accepted by collection operations.
#[derive(Debug, Clone, Default)]
pub enum Filter {
    /// No argument was supplied.
    #[default]
    Absent,
    /// An explicit null. Treated as `Absent` by every operation except
    /// `contains`, which looks for a null element, and `join`, which
    /// returns the receiver unchanged.
    Null,
    /// A primitive compared by strict equality (or read as a field name).
    Value(Primitive),
    /// A function invoked per element.
    Predicate(Predicate),
    /// Another ordered sequence, used for set-style comparison.
    Collection(List),
    /// A structured record. Only `intersect` and the membership test in
    /// `contains` give it meaning.
    Record(Record),
}

impl Filter {
    /// Builds a predicate filter from a closure.
    ///
    /// ```
    /// use linqed::{wrap, Filter};
    ///
    /// let evens = wrap(vec![1, 2, 3, 4])
    ///     .r#where(Filter::from_fn(|n| n.as_f64().is_some_and(|n| n % 2.0 == 0.0)));
    /// assert_eq!(evens.len(), 2);
    /// ```
    pub fn from_fn<F, R>(f: F) -> Self
    where
        F: Fn(&Element) -> R + 'static,
        R: Into<Element>,
    {
        Filter::Predicate(Predicate::new(f))
    }

    /// Builds a field-name filter for `distinct` and `join`.
    pub fn key(name: impl Into<String>) -> Self {
        Filter::Value(Primitive::String(name.into()))
    }

    /// Returns `true` for `Absent` and `Null`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Filter::Absent | Filter::Null)
    }

    /// Returns the runtime type name of the filter argument.
    pub fn type_name(&self) -> &'static str {
        match self {
            Filter::Absent => "undefined",
            Filter::Value(Primitive::Bool(_)) => "boolean",
            Filter::Value(Primitive::Number(_)) => "number",
            Filter::Value(Primitive::String(_)) => "string",
            Filter::Predicate(_) => "function",
            Filter::Null | Filter::Collection(_) | Filter::Record(_) => "object",
        }
    }
}

/// Reports a filter kind the operation cannot interpret.
///
/// This is observability only: the caller still returns its default value.
pub(crate) fn report_unsupported(operation: &'static str, filter: &Filter) {
    #[cfg(feature = "diagnostics")]
    tracing::warn!(
        operation,
        filter_type = filter.type_name(),
        ".{}() does not support filters of type \"{}\"",
        operation,
        filter.type_name()
    );

    #[cfg(not(feature = "diagnostics"))]
    let _ = (operation, filter);
}

macro_rules! filter_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Filter {
                fn from(n: $ty) -> Self {
                    Filter::Value(Primitive::Number(n as f64))
                }
            }
        )*
    };
}

filter_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Filter {
    fn from(b: bool) -> Self {
        Filter::Value(Primitive::Bool(b))
    }
}

impl From<&str> for Filter {
    fn from(s: &str) -> Self {
        Filter::Value(Primitive::String(s.to_string()))
    }
}

impl From<String> for Filter {
    fn from(s: String) -> Self {
        Filter::Value(Primitive::String(s))
    }
}

impl From<Primitive> for Filter {
    fn from(p: Primitive) -> Self {
        Filter::Value(p)
    }
}

impl From<Predicate> for Filter {
    fn from(p: Predicate) -> Self {
        Filter::Predicate(p)
    }
}

impl From<Record> for Filter {
    fn from(r: Record) -> Self {
        Filter::Record(r)
    }
}

impl From<List> for Filter {
    fn from(l: List) -> Self {
        Filter::Collection(l)
    }
}

/// Holes are dropped, as in the `Element` conversion. The resulting list
/// is a fresh identity, so `contains` with a collection filter only finds
/// a held list when given that very [`List`].
impl From<Collection> for Filter {
    fn from(c: Collection) -> Self {
        Filter::from(&c)
    }
}

/// See the owned conversion.
impl From<&Collection> for Filter {
    fn from(c: &Collection) -> Self {
        Filter::Collection(c.elements().cloned().collect())
    }
}

impl<T: Into<Element>> From<Vec<T>> for Filter {
    fn from(items: Vec<T>) -> Self {
        Filter::Collection(items.into_iter().collect())
    }
}

impl<T: Into<Filter>> From<Option<T>> for Filter {
    fn from(value: Option<T>) -> Self {
        value.map_or(Filter::Absent, Into::into)
    }
}

/// Classifies an element by its runtime kind.
impl From<Element> for Filter {
    fn from(element: Element) -> Self {
        match element {
            Element::Undefined => Filter::Absent,
            Element::Null => Filter::Null,
            Element::Bool(b) => Filter::Value(Primitive::Bool(b)),
            Element::Number(n) => Filter::Value(Primitive::Number(n)),
            Element::String(s) => Filter::Value(Primitive::String(s)),
            Element::Record(r) => Filter::Record(r),
            Element::List(l) => Filter::Collection(l),
        }
    }
}
