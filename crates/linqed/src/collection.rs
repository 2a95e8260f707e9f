//! The wrapped sequence and its plain sequence surface.
//!
//! A [`Collection`] behaves like the ordered sequence it wraps: it has a
//! length, can be indexed and iterated, and serializes exactly like the
//! sequence would. The query operations live in separate `impl` blocks
//! (see the `query`, `relational` and `aggregate` modules) and are plain
//! methods, so they never show up as data.
//!
//! # Holes
//!
//! A collection may be sparse. [`Collection::set`] past the end leaves
//! *holes*: indices that were never assigned. Holes count toward
//! [`len`](Collection::len) and read as `Undefined`, but operations that
//! visit elements one by one skip them, exactly as they would skip indices
//! missing from a sparse array.

use std::ops::Index;

use crate::element::{Element, List, UNDEFINED};

/// An ordered, index-addressable sequence of elements with query operations.
///
/// # Example
///
/// ```
/// use linqed::{wrap, Filter};
///
/// let numbers = wrap(vec![1, 1, 3, 5, 5]);
///
/// assert_eq!(numbers.len(), 5);
/// assert_eq!(numbers.distinct(Filter::Absent).len(), 3);
/// assert_eq!(numbers.sum(Filter::Absent), 15.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    slots: Vec<Option<Element>>,
}

/// Wraps an ordered sequence into a [`Collection`].
///
/// Wrapping an existing collection returns it as is, so `wrap(wrap(c))` and
/// `wrap(c)` are the same value.
pub fn wrap(sequence: impl Into<Collection>) -> Collection {
    sequence.into()
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Collection::default()
    }

    /// Wraps an ordered sequence. See [`wrap`].
    pub fn wrap(sequence: impl Into<Collection>) -> Self {
        sequence.into()
    }

    /// Builds a collection from raw slots, where `None` marks a hole.
    pub fn from_slots(slots: Vec<Option<Element>>) -> Self {
        Collection { slots }
    }

    /// Returns the number of indices, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the collection has no indices at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the element at `index`, or `None` for a hole or an index past
    /// the end.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Returns `true` if `index` is inside the collection but was never
    /// assigned.
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Appends an element.
    pub fn push(&mut self, element: impl Into<Element>) {
        self.slots.push(Some(element.into()));
    }

    /// Assigns an element at `index`, growing the collection with holes if
    /// the index is past the end.
    pub fn set(&mut self, index: usize, element: impl Into<Element>) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(element.into());
    }

    /// Iterates over every index in order, reading holes as `Undefined`.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// Iterates over assigned elements only, skipping holes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.slots.iter().flatten()
    }

    /// Copies the collection into a dense vector, holes read as `Undefined`.
    pub fn to_vec(&self) -> Vec<Element> {
        self.iter().cloned().collect()
    }

    /// Removes every element in place and returns the receiver.
    ///
    /// This is the only query operation that mutates its receiver in place.
    /// [`cleared`](Collection::cleared) is the non-mutating counterpart.
    pub fn empty(&mut self) -> &mut Self {
        self.slots.clear();
        self
    }

    /// Returns a new empty collection, leaving the receiver untouched.
    pub fn cleared(&self) -> Collection {
        Collection::new()
    }

    /// Strict membership among assigned elements.
    pub(crate) fn holds(&self, element: &Element) -> bool {
        self.elements().any(|item| item == element)
    }

    /// Appends `element` unless it is already strictly present.
    pub(crate) fn push_novel(&mut self, element: Element) {
        if !self.holds(&element) {
            self.slots.push(Some(element));
        }
    }
}

/// Reads like a sparse array: holes and indices past the end yield
/// `Undefined` instead of panicking.
impl Index<usize> for Collection {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        self.get(index).unwrap_or(&UNDEFINED)
    }
}

/// Iterator over every index of a [`Collection`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Option<Element>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|slot| slot.as_ref().unwrap_or(&UNDEFINED))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over every index of a [`Collection`].
#[derive(Debug)]
pub struct IntoIter {
    slots: std::vec::IntoIter<Option<Element>>,
}

impl Iterator for IntoIter {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(Option::unwrap_or_default)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl IntoIterator for Collection {
    type Item = Element;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.slots.into_iter(),
        }
    }
}

impl<T: Into<Element>> FromIterator<T> for Collection {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection {
            slots: iter.into_iter().map(|item| Some(item.into())).collect(),
        }
    }
}

impl<T: Into<Element>> Extend<T> for Collection {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.slots
            .extend(iter.into_iter().map(|item| Some(item.into())));
    }
}

impl<T: Into<Element>> From<Vec<T>> for Collection {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl From<List> for Collection {
    fn from(list: List) -> Self {
        list.iter().cloned().collect()
    }
}
