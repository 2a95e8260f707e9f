//! Arithmetic aggregates: `sum`, `average`, `max` and `min`.
//!
//! Without a filter the aggregates read numeric elements and ignore the
//! rest. With a predicate they read the numeric results of the predicate.
//! Every other filter kind yields the operation's sentinel.
//!
//! The sentinels overlap with real results: `sum` reports a zero total as
//! `-1`, and `max` starts from `-1`, so a collection of numbers all below
//! `-1` still reports `-1`.

use crate::collection::Collection;
use crate::element::Element;
use crate::filter::Filter;

/// Reported by `sum` for a zero total and by `average` for unusable filters.
const NOT_FOUND: f64 = -1.0;

/// Starting point for `max`.
const MAX_SEED: f64 = -1.0;

/// Starting point for `min`.
const MIN_SEED: f64 = f64::INFINITY;

impl Collection {
    /// Adds up numeric elements, or numeric predicate results.
    ///
    /// A total of exactly zero is reported as `-1`, whether it came from no
    /// numeric data at all or from values that cancel out.
    ///
    /// ```
    /// use linqed::{wrap, Element, Filter};
    ///
    /// let c = wrap(vec![Element::from(1), "a".into(), 1.into(), 3.into(), Element::Null, 8.into()]);
    /// assert_eq!(c.sum(Filter::Absent), 13.0);
    /// assert_eq!(wrap(Vec::<Element>::new()).sum(Filter::Absent), -1.0);
    /// ```
    pub fn sum(&self, filter: impl Into<Filter>) -> f64 {
        let total: f64 = match filter.into() {
            Filter::Absent | Filter::Null => self.elements().filter_map(Element::as_f64).sum(),
            Filter::Predicate(predicate) => self
                .elements()
                .filter_map(|item| predicate.call(item).as_f64())
                .sum(),
            Filter::Value(_) | Filter::Collection(_) | Filter::Record(_) => 0.0,
        };

        if total == 0.0 {
            NOT_FOUND
        } else {
            total
        }
    }

    /// Returns the arithmetic mean of numeric elements, or of numeric
    /// predicate results.
    ///
    /// A predicate excludes an element by returning `-1`. With nothing to
    /// average the result is `0`; a filter that is neither absent nor a
    /// predicate yields `-1`.
    pub fn average(&self, filter: impl Into<Filter>) -> f64 {
        match filter.into() {
            Filter::Absent | Filter::Null => mean(self.elements().filter_map(Element::as_f64)),
            Filter::Predicate(predicate) => mean(
                self.elements()
                    .filter_map(|item| predicate.call(item).as_f64())
                    .filter(|n| *n != NOT_FOUND),
            ),
            Filter::Value(_) | Filter::Collection(_) | Filter::Record(_) => NOT_FOUND,
        }
    }

    /// Returns the largest numeric element, or numeric predicate result.
    ///
    /// The scan starts at `-1`: with no larger candidate, or with a filter
    /// that is neither absent nor a predicate, the result is `-1`.
    pub fn max(&self, filter: impl Into<Filter>) -> f64 {
        match filter.into() {
            Filter::Absent | Filter::Null => {
                extremum(self.elements().filter_map(Element::as_f64), MAX_SEED, |a, b| a > b)
            }
            Filter::Predicate(predicate) => extremum(
                self.elements()
                    .filter_map(|item| predicate.call(item).as_f64()),
                MAX_SEED,
                |a, b| a > b,
            ),
            Filter::Value(_) | Filter::Collection(_) | Filter::Record(_) => MAX_SEED,
        }
    }

    /// Returns the smallest numeric element, or numeric predicate result.
    ///
    /// The scan starts at positive infinity, which is also the result when
    /// nothing numeric is found or the filter is neither absent nor a
    /// predicate.
    pub fn min(&self, filter: impl Into<Filter>) -> f64 {
        match filter.into() {
            Filter::Absent | Filter::Null => {
                extremum(self.elements().filter_map(Element::as_f64), MIN_SEED, |a, b| a < b)
            }
            Filter::Predicate(predicate) => extremum(
                self.elements()
                    .filter_map(|item| predicate.call(item).as_f64()),
                MIN_SEED,
                |a, b| a < b,
            ),
            Filter::Value(_) | Filter::Collection(_) | Filter::Record(_) => MIN_SEED,
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (count, total) = values.fold((0usize, 0.0), |(count, total), n| (count + 1, total + n));
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Keeps the running value unless `replaces(candidate, current)` holds.
fn extremum(values: impl Iterator<Item = f64>, seed: f64, replaces: impl Fn(f64, f64) -> bool) -> f64 {
    values.fold(seed, |current, candidate| {
        if replaces(candidate, current) {
            candidate
        } else {
            current
        }
    })
}
