//! Runtime element types held by a collection.
//!
//! The [`Element`] enum represents any value a [`Collection`] can hold:
//! primitives, structured records, nested lists, or the absent markers
//! `null` and `undefined`. No schema is imposed; operations inspect the
//! shape of each element when they run.
//!
//! # Equality
//!
//! `PartialEq` on [`Element`] is *strict* equality. Primitives compare by
//! value (`NaN` is never equal to itself), while records and lists compare
//! by identity: two structurally equal records built separately are not
//! equal, but two handles to the same record are.
//!
//! ```
//! use linqed::{Element, Record};
//!
//! let a = Record::new().with("id", 1);
//! let b = Record::new().with("id", 1);
//!
//! assert_eq!(Element::from(a.clone()), Element::from(a.clone()));
//! assert_ne!(Element::from(a), Element::from(b));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::collection::Collection;

/// Shared `undefined` used when a hole or missing index is read by reference.
pub(crate) static UNDEFINED: Element = Element::Undefined;

/// A single value held by a collection.
#[derive(Debug, Clone, Default)]
pub enum Element {
    /// No value: an unset field, a missing index, or a predicate that
    /// returned nothing.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean primitive.
    Bool(bool),
    /// Numeric primitive. All numbers are 64-bit floats.
    Number(f64),
    /// String primitive.
    String(String),
    /// Structured record with named fields, compared by identity.
    Record(Record),
    /// Nested ordered sequence, compared by identity.
    List(List),
}

impl Element {
    /// Returns `true` for `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Element::Undefined)
    }

    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Element::Null)
    }

    /// Returns `true` for `Null` or `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Element::Null | Element::Undefined)
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Element::Bool(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Element::Number(_))
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Element::String(_))
    }

    /// Returns `true` if this is a `Record`.
    pub fn is_record(&self) -> bool {
        matches!(self, Element::Record(_))
    }

    /// Returns `true` if this is a nested `List`.
    pub fn is_list(&self) -> bool {
        matches!(self, Element::List(_))
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Element::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the numeric value, if present.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Element::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the record, if present.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Element::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Extracts the nested list, if present.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Element::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value of a record field.
    ///
    /// Missing fields and non-record elements yield `Undefined`, so
    /// predicates can probe any element without checking its shape first.
    pub fn field(&self, key: &str) -> Element {
        self.as_record()
            .and_then(|record| record.get(key))
            .cloned()
            .unwrap_or_default()
    }

    /// Returns `true` if the element counts as true in a boolean context.
    ///
    /// `Undefined`, `Null`, `false`, `0`, `NaN` and the empty string are
    /// falsy. Every other value, including empty records and lists, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Element::Undefined | Element::Null => false,
            Element::Bool(b) => *b,
            Element::Number(n) => *n != 0.0 && !n.is_nan(),
            Element::String(s) => !s.is_empty(),
            Element::Record(_) | Element::List(_) => true,
        }
    }

    /// Returns the runtime type name of this element.
    ///
    /// Null, records and lists all report `"object"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Undefined => "undefined",
            Element::Bool(_) => "boolean",
            Element::Number(_) => "number",
            Element::String(_) => "string",
            Element::Null | Element::Record(_) | Element::List(_) => "object",
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::Undefined, Element::Undefined) => true,
            (Element::Null, Element::Null) => true,
            (Element::Bool(a), Element::Bool(b)) => a == b,
            (Element::Number(a), Element::Number(b)) => a == b,
            (Element::String(a), Element::String(b)) => a == b,
            (Element::Record(a), Element::Record(b)) => a.ptr_eq(b),
            (Element::List(a), Element::List(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

macro_rules! element_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Element {
                fn from(n: $ty) -> Self {
                    Element::Number(n as f64)
                }
            }
        )*
    };
}

element_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Element::Bool(b)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::String(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::String(s)
    }
}

impl From<Record> for Element {
    fn from(r: Record) -> Self {
        Element::Record(r)
    }
}

impl From<List> for Element {
    fn from(l: List) -> Self {
        Element::List(l)
    }
}

/// Nests the collection's assigned elements as a list, dropping holes.
///
/// The list is a fresh identity: it never compares equal to another list,
/// including one built from the same collection.
impl From<Collection> for Element {
    fn from(c: Collection) -> Self {
        Element::List(c.elements().cloned().collect())
    }
}

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(value: Option<T>) -> Self {
        value.map_or(Element::Undefined, Into::into)
    }
}

/// A structured element with named fields.
///
/// Fields keep their insertion order. Records are shared behind an `Arc`,
/// and cloning a record produces another handle to the *same* record, which
/// is what strict equality compares.
#[derive(Clone, Default)]
pub struct Record(Arc<Vec<(String, Element)>>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Adds or replaces a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Element>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces a field, returning the previous value.
    ///
    /// A record whose handle is shared is copied first, so the other handles
    /// keep seeing the old fields and this handle gets a new identity.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Element>) -> Option<Element> {
        let key = key.into();
        let value = value.into();
        let fields = Arc::make_mut(&mut self.0);
        match fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                fields.push((key, value));
                None
            }
        }
    }

    /// Returns the value of a field, if the record has it.
    pub fn get(&self, key: &str) -> Option<&Element> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the record has a field with this name.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new record holding the fields of `self` followed by every
    /// field of `other` that `self` does not already define.
    pub fn merged(&self, other: &Record) -> Record {
        let mut fields: Vec<(String, Element)> = self.0.as_ref().clone();
        for (key, value) in other.0.iter() {
            if !self.contains_key(key) {
                fields.push((key.clone(), value.clone()));
            }
        }
        Record(Arc::new(fields))
    }

    /// Returns `true` if both handles point at the same record.
    pub fn ptr_eq(&self, other: &Record) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Element>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

/// An ordered sequence held as a single element.
///
/// Like records, lists compare by identity.
#[derive(Clone, Default)]
pub struct List(Arc<Vec<Element>>);

impl List {
    /// Creates a list from its elements.
    pub fn new(elements: Vec<Element>) -> Self {
        List(Arc::new(elements))
    }

    /// Returns the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.0.get(index)
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.0.iter()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if both handles point at the same list.
    pub fn ptr_eq(&self, other: &List) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Into<Element>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List::new(iter.into_iter().map(Into::into).collect())
    }
}
