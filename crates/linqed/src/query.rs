//! Selection, projection and membership operations.
//!
//! Each operation takes a [`Filter`] and matches on its kind. Kinds an
//! operation has no use for fall through to that operation's default; none
//! of them fail.
//!
//! | Operation | Absent | Value | Predicate | Collection | Record |
//! |-----------|--------|-------|-----------|------------|--------|
//! | `all` | `false` | every element equals | every result truthy | `true` | `true` |
//! | `contains` | non-empty | member | any result truthy | member | member |
//! | `where` | receiver | receiver | truthy elements | receiver | receiver |
//! | `first` | first truthy | **index** or -1 | element or null | null | null |
//! | `select` | receiver | receiver | projected | receiver | receiver |
//! | `except` | drop nullish | same type, not equal | truthy elements | not in other | empty |
//! | `distinct` | dedupe | by field (string) | by result | empty | empty |

use crate::collection::Collection;
use crate::element::Element;
use crate::filter::{report_unsupported, Filter, Primitive};

impl Collection {
    // ========================================================================
    // Membership
    // ========================================================================

    /// Returns `true` if every element matches the filter.
    ///
    /// - `Absent`/`Null`: always `false`.
    /// - `Value`: every element strictly equals the value.
    /// - `Predicate`: the predicate is truthy for every element.
    /// - `Collection`/`Record`: nothing is compared, the result stays `true`.
    ///
    /// An empty collection yields `true` for the value and predicate forms.
    ///
    /// ```
    /// use linqed::{wrap, Filter};
    ///
    /// assert!(wrap(vec![1, 1, 1, 1]).all(1));
    /// assert!(!wrap(vec![1, 1, 1, 2]).all(1));
    /// assert!(!wrap(vec![1, 2, 3]).all(Filter::Absent));
    /// ```
    pub fn all(&self, filter: impl Into<Filter>) -> bool {
        match filter.into() {
            Filter::Absent | Filter::Null => false,
            Filter::Value(value) => {
                let value = value.to_element();
                self.elements().all(|item| *item == value)
            }
            Filter::Predicate(predicate) => self.elements().all(|item| predicate.test(item)),
            Filter::Collection(_) | Filter::Record(_) => true,
        }
    }

    /// Returns `true` if any element matches the filter.
    ///
    /// - `Absent`: the collection has at least one index (holes count).
    /// - `Predicate`: the predicate is truthy for some index; holes are
    ///   passed as `Undefined`.
    /// - Any other kind: strict membership of that value, so a record or list
    ///   is found only if that very record or list is held.
    pub fn contains(&self, filter: impl Into<Filter>) -> bool {
        match filter.into() {
            Filter::Absent => !self.is_empty(),
            Filter::Predicate(predicate) => self.iter().any(|item| predicate.test(item)),
            Filter::Null => self.holds(&Element::Null),
            Filter::Value(value) => self.holds(&value.to_element()),
            Filter::Collection(list) => self.holds(&Element::List(list)),
            Filter::Record(record) => self.holds(&Element::Record(record)),
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Returns the elements for which the predicate is truthy.
    ///
    /// Any filter that is not a predicate returns the receiver unchanged.
    /// To transform elements rather than choose them, use
    /// [`select`](Collection::select).
    pub fn r#where(&self, filter: impl Into<Filter>) -> Collection {
        match filter.into() {
            Filter::Predicate(predicate) => self
                .elements()
                .filter(|item| predicate.test(item))
                .cloned()
                .collect(),
            _ => self.clone(),
        }
    }

    /// Returns the first match for the filter.
    ///
    /// The result type depends on the filter kind:
    ///
    /// - `Absent`/`Null`: the first truthy element, or `Undefined`.
    /// - `Value`: the **index** of the first element strictly equal to the
    ///   value, as a number, or `-1`. Not the element.
    /// - `Predicate`: the first element the predicate accepts, or `Null`.
    /// - `Collection`/`Record`: unsupported. A diagnostic is logged and
    ///   `Null` is returned.
    ///
    /// ```
    /// use linqed::{wrap, Element, Filter};
    ///
    /// let c = wrap(vec![Element::Null, 1.into(), "a".into(), 6.into(), 6.into()]);
    ///
    /// assert_eq!(c.first(6), Element::from(3));
    /// assert_eq!(c.first(Filter::Absent), Element::from(1));
    /// assert_eq!(c.first(Filter::from_fn(|e| e.is_string())), Element::from("a"));
    /// ```
    pub fn first(&self, filter: impl Into<Filter>) -> Element {
        match filter.into() {
            Filter::Absent | Filter::Null => self
                .iter()
                .find(|item| item.is_truthy())
                .cloned()
                .unwrap_or_default(),
            Filter::Value(value) => {
                let value = value.to_element();
                match self.iter().position(|item| *item == value) {
                    Some(index) => Element::from(index),
                    None => Element::from(-1),
                }
            }
            Filter::Predicate(predicate) => self
                .iter()
                .find(|item| predicate.test(item))
                .cloned()
                .unwrap_or(Element::Null),
            unsupported @ (Filter::Collection(_) | Filter::Record(_)) => {
                report_unsupported("first", &unsupported);
                Element::Null
            }
        }
    }

    /// Returns the result of [`first`](Collection::first), or `default` when
    /// nothing matched.
    ///
    /// - `Absent`/`Null`: always `default`.
    /// - `Value`: the index of the first match, or `default` instead of -1.
    /// - `Predicate`: the first accepted element, or `default` instead of null.
    /// - `Collection`/`Record`: a diagnostic is logged and `Null` is returned,
    ///   not `default`.
    pub fn first_or_default(
        &self,
        filter: impl Into<Filter>,
        default: impl Into<Element>,
    ) -> Element {
        let default = default.into();
        match filter.into() {
            Filter::Absent | Filter::Null => default,
            filter @ Filter::Value(_) => {
                let found = self.first(filter);
                if found.is_null() || found == Element::from(-1) {
                    default
                } else {
                    found
                }
            }
            filter @ Filter::Predicate(_) => {
                let found = self.first(filter);
                if found.is_null() {
                    default
                } else {
                    found
                }
            }
            unsupported @ (Filter::Collection(_) | Filter::Record(_)) => {
                report_unsupported("first_or_default", &unsupported);
                Element::Null
            }
        }
    }

    // ========================================================================
    // Projection and partitioning
    // ========================================================================

    /// Maps every element through the predicate.
    ///
    /// The result has one entry per assigned element, in order. Results of
    /// `Undefined` are kept as real entries. Any filter that is not a
    /// predicate returns the receiver unchanged.
    pub fn select(&self, filter: impl Into<Filter>) -> Collection {
        match filter.into() {
            Filter::Predicate(predicate) => {
                self.elements().map(|item| predicate.call(item)).collect()
            }
            _ => self.clone(),
        }
    }

    /// Returns the elements that survive the filter.
    ///
    /// - `Absent`/`Null`: drops `Null` and `Undefined` elements.
    /// - `Value`: keeps elements of the same primitive type that are not
    ///   equal to the value. Elements of any other type are dropped.
    /// - `Predicate`: keeps elements for which the predicate is *truthy*.
    /// - `Collection`: keeps elements not strictly present in the other
    ///   collection.
    /// - `Record`: nothing survives.
    ///
    /// ```
    /// use linqed::{wrap, Element};
    ///
    /// let c = wrap(vec![Element::from(1), 2.into(), 3.into(), "a".into()]);
    ///
    /// assert_eq!(c.except(2).len(), 2);
    /// assert_eq!(c.except(vec![Element::from(1), "a".into()]).len(), 2);
    /// ```
    pub fn except(&self, filter: impl Into<Filter>) -> Collection {
        match filter.into() {
            Filter::Absent | Filter::Null => self
                .elements()
                .filter(|item| !item.is_nullish())
                .cloned()
                .collect(),
            Filter::Value(value) => {
                let value = value.to_element();
                self.elements()
                    .filter(|item| item.type_name() == value.type_name() && **item != value)
                    .cloned()
                    .collect()
            }
            Filter::Predicate(predicate) => self
                .elements()
                .filter(|item| predicate.test(item))
                .cloned()
                .collect(),
            Filter::Collection(other) => self
                .elements()
                .filter(|item| !other.iter().any(|excluded| excluded == *item))
                .cloned()
                .collect(),
            Filter::Record(_) => Collection::new(),
        }
    }

    /// Returns the collection with duplicates removed, keeping first
    /// occurrences in order.
    ///
    /// - `Absent`/`Null`: duplicates by strict element equality.
    /// - `Value` holding a string: the string names a field. Records sharing
    ///   a value for that field collapse to the first one; elements without
    ///   the field are dropped.
    /// - `Predicate`: elements collapse on the predicate's result. A `Null`
    ///   result drops the element entirely.
    /// - Any other kind: an empty collection.
    pub fn distinct(&self, filter: impl Into<Filter>) -> Collection {
        let mut values = Collection::new();

        match filter.into() {
            Filter::Absent | Filter::Null => {
                for item in self.elements() {
                    values.push_novel(item.clone());
                }
            }
            Filter::Value(Primitive::String(key)) => {
                let mut seen: Vec<&Element> = Vec::new();
                for item in self.elements() {
                    let Some(value) = item.as_record().and_then(|record| record.get(&key)) else {
                        continue;
                    };
                    if !seen.contains(&value) {
                        seen.push(value);
                        values.push(item.clone());
                    }
                }
            }
            Filter::Predicate(predicate) => {
                let mut seen: Vec<Element> = Vec::new();
                for item in self.elements() {
                    let value = predicate.call(item);
                    if !value.is_null() && !seen.contains(&value) {
                        seen.push(value);
                        values.push(item.clone());
                    }
                }
            }
            Filter::Value(_) | Filter::Collection(_) | Filter::Record(_) => {}
        }

        values
    }
}
