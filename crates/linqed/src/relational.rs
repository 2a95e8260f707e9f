//! Set and relational operations: `intersect`, `union` and `join`.

use crate::collection::Collection;
use crate::element::{Element, List, Record};
use crate::filter::{Filter, Primitive};

impl Collection {
    /// Grows the receiver with every element of the filter it does not
    /// already hold, then returns a copy of the grown receiver.
    ///
    /// Despite its name this is not a set intersection: the receiver is
    /// *extended*, and its length afterwards is the original length plus the
    /// number of novel elements.
    ///
    /// - `Absent`/`Null`: returns a new empty collection, receiver untouched.
    /// - `Collection`: appends each element not strictly present.
    /// - `Value`/`Record`: appends that single value if not present.
    /// - `Predicate`: receiver untouched.
    ///
    /// [`union`](Collection::union) does the same without mutating.
    ///
    /// ```
    /// use linqed::wrap;
    ///
    /// let mut c = wrap(vec![1, 2, 3]);
    /// let grown = c.intersect(vec![3, 4, 5]);
    ///
    /// assert_eq!(grown.len(), 5);
    /// assert_eq!(c.len(), 5);
    /// ```
    pub fn intersect(&mut self, filter: impl Into<Filter>) -> Collection {
        match filter.into() {
            Filter::Absent | Filter::Null => return Collection::new(),
            Filter::Collection(other) => {
                for item in other.iter() {
                    self.push_novel(item.clone());
                }
            }
            Filter::Value(value) => self.push_novel(value.to_element()),
            Filter::Record(record) => self.push_novel(Element::Record(record)),
            Filter::Predicate(_) => {}
        }
        self.clone()
    }

    /// Returns a new collection holding the receiver's elements followed by
    /// every element of the filter not already present.
    ///
    /// This is [`intersect`](Collection::intersect) without the mutation, with
    /// one difference: an `Absent` or `Null` filter yields a copy of the
    /// receiver rather than an empty collection.
    pub fn union(&self, filter: impl Into<Filter>) -> Collection {
        let filter = filter.into();
        if filter.is_absent() {
            return self.clone();
        }
        let mut merged = self.clone();
        merged.intersect(filter)
    }

    /// Joins every receiver element with its first match in `outer`.
    ///
    /// `outer` must be a sequence; anything else returns the receiver
    /// unchanged. Matching compares, by strict equality:
    ///
    /// - `Absent`: the field named `id` on both sides.
    /// - `Value` holding a string: the field with that name on both sides.
    /// - `Predicate`: the predicate's result on both sides.
    /// - Any other kind, including `Null`: receiver returned unchanged.
    ///
    /// Each result is a new record holding the receiver element's fields
    /// plus the fields of the match the receiver element does not define.
    /// Elements with no match still produce a new record, with no fields
    /// added. Results follow receiver order.
    ///
    /// ```
    /// use linqed::{wrap, Element, Filter, Record};
    ///
    /// let people = wrap(vec![
    ///     Record::new().with("name", "Jeff").with("id", 1),
    ///     Record::new().with("name", "Rick").with("id", 2),
    /// ]);
    /// let cities = wrap(vec![Record::new().with("city", "Atlanta").with("id", 1)]);
    ///
    /// let joined = people.join(cities, Filter::key("id"));
    ///
    /// assert_eq!(joined[0].field("city"), Element::from("Atlanta"));
    /// assert!(joined[1].field("city").is_undefined());
    /// ```
    pub fn join(&self, outer: impl Into<Filter>, filter: impl Into<Filter>) -> Collection {
        let Filter::Collection(outer) = outer.into() else {
            return self.clone();
        };

        match filter.into() {
            Filter::Absent => self.join_on(&outer, |item| item.field("id")),
            Filter::Value(Primitive::String(key)) => self.join_on(&outer, |item| item.field(&key)),
            Filter::Predicate(predicate) => self.join_on(&outer, |item| predicate.call(item)),
            Filter::Null | Filter::Value(_) | Filter::Collection(_) | Filter::Record(_) => {
                self.clone()
            }
        }
    }

    fn join_on<K>(&self, outer: &List, key: K) -> Collection
    where
        K: Fn(&Element) -> Element,
    {
        let no_match = Record::new();

        self.elements()
            .map(|item| {
                let wanted = key(item);
                let matched = outer
                    .iter()
                    .find(|candidate| key(*candidate) == wanted)
                    .and_then(Element::as_record)
                    .unwrap_or(&no_match);

                let base = item.as_record().cloned().unwrap_or_default();
                Element::Record(base.merged(matched))
            })
            .collect()
    }
}
