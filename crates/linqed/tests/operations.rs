//! Behavior of every query operation against shared fixtures.

use linqed::{wrap, Collection, Element, Filter, Record};

// ============================================================================
// Fixtures
// ============================================================================

/// Sparse collection: a hole at index 0, then `2, 3, 4, "Hi", false`.
fn basic() -> Collection {
    let mut c = Collection::new();
    c.set(1, 2);
    c.set(2, 3);
    c.set(3, 4);
    c.set(4, "Hi");
    c.set(5, false);
    c
}

fn numbers() -> Collection {
    wrap(vec![1, 1, 1, 1])
}

fn strings() -> Collection {
    wrap(vec!["hi", "hi", "hi", "hi"])
}

fn booleans() -> Collection {
    wrap(vec![true, true, true, true])
}

fn person(name: &str, id: Option<i64>, role: Option<&str>) -> Record {
    let mut record = Record::new().with("name", name);
    if let Some(id) = id {
        record.insert("id", id);
    }
    if let Some(role) = role {
        record.insert("role", role);
    }
    record
}

/// Staff records. Tom has no id and Stan has no role.
fn staff() -> Collection {
    wrap(vec![
        person("Ben", Some(1), Some("Engineer")),
        person("Rob", Some(2), Some("CSR")),
        person("Bill", Some(3), Some("Service Tech")),
        person("Tom", None, Some("Owner")),
        person("Stan", Some(4), None),
        person("Rick", Some(5), Some("Service Manager")),
    ])
}

/// Staff plus Keith, who shares Rick's id.
fn staff_with_duplicate_id() -> Collection {
    let mut c = staff();
    c.push(person("Keith", Some(5), Some("Owner")));
    c
}

fn id_or(fallback: f64) -> Filter {
    Filter::from_fn(move |item| item.field("id").as_f64().unwrap_or(fallback))
}

// ============================================================================
// Wrapping
// ============================================================================

#[test]
fn wrapped_collection_behaves_like_a_sequence() {
    let c = wrap(vec![1, 2, 3, 4]);

    assert_eq!(c.len(), 4);
    assert_eq!(c[0], Element::from(1));
    assert_eq!(c.iter().count(), 4);
    assert_eq!(c.to_json_string().unwrap(), "[1,2,3,4]");
}

#[test]
fn operations_return_wrapped_collections() {
    let filtered = staff().r#where(Filter::from_fn(|p| p.field("role").is_string()));
    let names = filtered.select(Filter::from_fn(|p| p.field("name")));

    assert_eq!(names.len(), 5);
    assert_eq!(names.first(Filter::Absent), Element::from("Ben"));
}

// ============================================================================
// all
// ============================================================================

#[test]
fn all_without_filter_is_false() {
    assert!(!basic().all(Filter::Absent));
}

#[test]
fn all_with_primitive_filters() {
    assert!(numbers().all(1));
    assert!(!basic().all(2));
    assert!(strings().all("hi"));
    assert!(!basic().all("Hi"));
    assert!(booleans().all(true));
    assert!(!basic().all(false));
}

#[test]
fn all_with_predicate() {
    let has_name = Filter::from_fn(|p| p.field("name").as_str().is_some_and(|s| !s.is_empty()));
    let has_role = Filter::from_fn(|p| p.field("role").as_str().is_some_and(|s| !s.is_empty()));

    assert!(staff().all(has_name));
    assert!(!staff().all(has_role));
}

// ============================================================================
// average
// ============================================================================

#[test]
fn average_of_numeric_elements() {
    assert_eq!(basic().average(Filter::Absent), 3.0);
    assert_eq!(numbers().average(Filter::Absent), 1.0);
    assert_eq!(strings().average(Filter::Absent), 0.0);
    assert_eq!(staff().average(Filter::Absent), 0.0);
}

#[test]
fn average_with_predicate() {
    let plus = |step: f64| {
        Filter::from_fn(move |item| item.as_f64().map_or(-1.0, |n| n + step))
    };

    assert_eq!(basic().average(plus(1.0)), 4.0);
    assert_eq!(numbers().average(plus(1.0)), 2.0);
    assert_eq!(strings().average(plus(5.0)), 0.0);
    assert_eq!(staff().average(id_or(-1.0)), 3.0);
}

#[test]
fn average_with_invalid_filter() {
    assert_eq!(basic().average(1), -1.0);
    assert_eq!(basic().average("test"), -1.0);
    assert_eq!(basic().average(true), -1.0);
    assert_eq!(basic().average(Record::new()), -1.0);
}

// ============================================================================
// contains
// ============================================================================

#[test]
fn contains_without_filter_checks_emptiness() {
    assert!(wrap(vec![1, 2, 3, 4]).contains(Filter::Absent));
    assert!(!Collection::new().contains(Filter::Absent));
}

#[test]
fn contains_primitive_membership() {
    let c = wrap(vec![1, 2, 3, 4]);
    assert!(c.contains(1));
    assert!(!c.contains(5));
}

#[test]
fn contains_with_predicate() {
    let cars = wrap(vec![
        Record::new().with("name", "Ben").with("id", 1).with("car", "Versa Note"),
        Record::new().with("name", "Dale").with("id", 2).with("car", "Versa"),
        Record::new().with("name", "Bill").with("id", 3).with("car", "Versa Note"),
        Record::new().with("name", "Rob").with("id", 4),
    ]);

    let returns_match = |id: i64| {
        Filter::from_fn(move |item| {
            if item.field("id") == Element::from(id) {
                item.clone()
            } else {
                Element::Undefined
            }
        })
    };

    assert!(cars.contains(returns_match(1)));
    assert!(!cars.contains(returns_match(5)));
}

#[test]
fn contains_predicate_sees_holes() {
    assert!(basic().contains(Filter::from_fn(|item| item.is_undefined())));
    assert!(!basic().contains(Filter::Null));
}

// ============================================================================
// distinct
// ============================================================================

#[test]
fn distinct_without_filter() {
    assert_eq!(basic().distinct(Filter::Absent).len(), 5);
    assert_eq!(numbers().distinct(Filter::Absent).len(), 1);
    assert_eq!(strings().distinct(Filter::Absent).len(), 1);
    assert_eq!(booleans().distinct(Filter::Absent).len(), 1);
    assert_eq!(Collection::new().distinct(Filter::Absent).len(), 0);
}

#[test]
fn distinct_by_field_name() {
    assert_eq!(basic().distinct("id").len(), 0);
    assert_eq!(staff_with_duplicate_id().distinct("name").len(), 7);
    assert_eq!(staff_with_duplicate_id().distinct(Filter::key("id")).len(), 5);
}

#[test]
fn distinct_by_field_keeps_first_occurrence() {
    let by_id = staff_with_duplicate_id().distinct("id");
    let names: Vec<Element> = by_id.iter().map(|p| p.field("name")).collect();
    assert_eq!(names[4], Element::from("Rick"));
}

#[test]
fn distinct_by_predicate() {
    let id_or_null = Filter::from_fn(|p| match p.field("id") {
        Element::Undefined => Element::Null,
        id => id,
    });
    assert_eq!(staff_with_duplicate_id().distinct(id_or_null).len(), 5);
}

#[test]
fn distinct_records_compare_by_identity() {
    let shared = Record::new().with("id", 1);
    let c = wrap(vec![shared.clone(), shared, Record::new().with("id", 1)]);
    assert_eq!(c.distinct(Filter::Absent).len(), 2);
}

// ============================================================================
// empty
// ============================================================================

#[test]
fn empty_clears_the_receiver() {
    let mut c = wrap(vec![1, 2, 3, 4]);
    assert_eq!(c.len(), 4);
    assert_eq!(c.empty().len(), 0);
    assert_eq!(c.len(), 0);
}

#[test]
fn cleared_returns_a_new_empty_collection() {
    let c = wrap(vec![1, 2, 3, 4]);
    let cleared = c.cleared();
    assert!(cleared.is_empty());
    assert_eq!(c.len(), 4);
}

// ============================================================================
// except
// ============================================================================

/// `basic()` with a trailing null, as used by the except checks.
fn basic_with_null() -> Collection {
    let mut c = basic();
    c.set(6, Element::Null);
    c
}

#[test]
fn except_without_filter_drops_nullish() {
    assert_eq!(basic_with_null().except(Filter::Absent).len(), 5);
    assert_eq!(basic_with_null().except(Filter::Null).len(), 5);

    let expected = vec![
        Element::from(2),
        3.into(),
        4.into(),
        "Hi".into(),
        false.into(),
    ];
    assert_eq!(basic_with_null().except(Filter::Null).to_vec(), expected);
    assert_eq!(basic_with_null().except(Filter::Absent).to_vec(), expected);
}

#[test]
fn except_primitive() {
    let strings = wrap(vec!["hi", "hi", "hi", "hi", "bye"]);
    let booleans = wrap(vec![true, true, true, true, false]);

    assert_eq!(basic_with_null().except(2).len(), 2);
    assert_eq!(strings.except("hi").len(), 1);
    assert_eq!(booleans.except(true).len(), 1);
}

#[test]
fn except_with_predicate_keeps_truthy() {
    let not_two_or_three = Filter::from_fn(|p| {
        let id = p.field("id");
        id != Element::from(2) && id != Element::from(3)
    });
    assert_eq!(staff_with_duplicate_id().except(not_two_or_three).len(), 5);
}

#[test]
fn except_with_collection() {
    let excluded = wrap(vec![Element::from(2), Element::from(false)]);
    assert_eq!(basic_with_null().except(excluded).len(), 4);
}

// ============================================================================
// first
// ============================================================================

fn short_staff() -> Collection {
    wrap(vec![
        person("Ben", Some(1), Some("Engineer")),
        person("Rob", Some(2), Some("CSR")),
        person("Bill", Some(3), Some("Service Tech")),
        person("Rick", Some(4), Some("Service Manager")),
    ])
}

fn id_is(id: i64) -> Filter {
    Filter::from_fn(move |p| p.field("id") == Element::from(id))
}

#[test]
fn first_without_filter_skips_holes_and_falsy() {
    assert_eq!(basic().first(Filter::Absent), Element::from(2));
}

#[test]
fn first_with_primitive_returns_index() {
    let c = basic();
    assert_eq!(c.first(3), Element::from(2));
    assert_eq!(c.first(30), Element::from(-1));
    assert_eq!(c.first("Hi"), Element::from(4));
    assert_eq!(c.first("Goodbye"), Element::from(-1));
    assert_eq!(c.first(false), Element::from(5));
    assert_eq!(c.first(true), Element::from(-1));
}

#[test]
fn first_index_counts_every_slot() {
    let c = wrap(vec![
        Element::Null,
        1.into(),
        "a".into(),
        true.into(),
        false.into(),
        6.into(),
        6.into(),
        7.into(),
    ]);
    assert_eq!(c.first(6), Element::from(5));
}

#[test]
fn first_with_predicate_returns_element() {
    assert_eq!(short_staff().first(id_is(2)).field("name"), Element::from("Rob"));
    assert!(short_staff().first(id_is(5)).is_null());
}

#[test]
fn first_with_record_filter_is_null() {
    assert!(short_staff().first(Record::new()).is_null());
}

// ============================================================================
// first_or_default
// ============================================================================

#[test]
fn first_or_default_without_filter() {
    assert_eq!(basic().first_or_default(Filter::Null, 0), Element::from(0));
    assert_eq!(basic().first_or_default(Filter::Absent, 0), Element::from(0));
}

#[test]
fn first_or_default_with_primitive() {
    let c = basic();
    assert_eq!(c.first_or_default(3, "stop"), Element::from(2));
    assert_eq!(c.first_or_default(30, "stop"), Element::from("stop"));
    assert_eq!(c.first_or_default("Hi", "stop"), Element::from(4));
    assert_eq!(c.first_or_default("Goodbye", "stop"), Element::from("stop"));
    assert_eq!(c.first_or_default(false, "stop"), Element::from(5));
    assert_eq!(c.first_or_default(true, "stop"), Element::from("stop"));
}

#[test]
fn first_or_default_with_predicate() {
    let found = short_staff().first_or_default(id_is(2), "stop");
    assert_eq!(found.field("name"), Element::from("Rob"));
    assert_eq!(short_staff().first_or_default(id_is(5), "stop"), Element::from("stop"));
}

#[test]
fn first_or_default_with_record_filter_is_null() {
    assert!(short_staff().first_or_default(Record::new(), "stop").is_null());
}

// ============================================================================
// intersect / union
// ============================================================================

#[test]
fn intersect_without_filter_is_empty() {
    assert_eq!(numbers().intersect(Filter::Absent).len(), 0);
}

#[test]
fn intersect_appends_novel_elements() {
    let other = wrap(vec![
        Element::from(2),
        3.into(),
        7.into(),
        8.into(),
        9.into(),
        "boo".into(),
    ]);
    assert_eq!(basic().intersect(other).len(), 10);
}

#[test]
fn intersect_treats_single_values_as_one_element() {
    let mut strings = wrap(vec!["hi", "hi", "hi", "hi", "bye"]);
    let mut booleans = wrap(vec![true, true, true, true, false]);

    assert_eq!(basic().intersect(5).len(), 7);
    assert_eq!(numbers().intersect("boo").len(), 5);
    assert_eq!(strings.intersect(true).len(), 6);
    assert_eq!(staff_with_duplicate_id().intersect(Record::new()).len(), 8);
    assert_eq!(booleans.intersect(true).len(), 5);
}

#[test]
fn intersect_grows_the_receiver() {
    let mut c = basic();
    let result = c.intersect(5);
    assert_eq!(c.len(), 7);
    assert_eq!(result, c);
}

#[test]
fn union_leaves_the_receiver() {
    let c = basic();
    assert_eq!(c.union(vec![2, 7]).len(), 7);
    assert_eq!(c.len(), 6);
}

// ============================================================================
// join
// ============================================================================

fn inner() -> Collection {
    wrap(vec![
        Record::new().with("name", "Ben").with("id", 1).with("car", "Versa Note"),
        Record::new().with("name", "Dale").with("id", 2).with("car", "Versa"),
        Record::new().with("name", "Bill").with("id", 3).with("car", "Versa Note"),
        Record::new().with("name", "Rob").with("id", 4),
    ])
}

fn outer() -> Collection {
    wrap(vec![
        Record::new().with("id", 1).with("department", "Installation"),
        Record::new().with("id", 3).with("department", "Service"),
        Record::new().with("id", 4).with("department", "CSR"),
    ])
}

#[test]
fn join_without_outer_returns_receiver() {
    let joined = inner().join(Filter::Absent, Filter::Absent);
    assert_eq!(joined[0].field("name"), Element::from("Ben"));
}

#[test]
fn join_by_field_name() {
    let joined = inner().join(outer(), "id");
    assert_eq!(joined[0].field("department"), Element::from("Installation"));
}

#[test]
fn join_defaults_to_id() {
    let joined = inner().join(outer(), Filter::Absent);
    assert_eq!(joined[0].field("department"), Element::from("Installation"));
    assert!(joined[1].field("department").is_undefined());
    assert_eq!(joined[3].field("department"), Element::from("CSR"));
}

#[test]
fn join_by_predicate() {
    let key = Filter::from_fn(|i| match i.field("id") {
        Element::Undefined => Element::Null,
        id => id,
    });
    let joined = inner().join(outer(), key);
    assert_eq!(joined[0].field("department"), Element::from("Installation"));
    assert_eq!(joined[2].field("department"), Element::from("Service"));
}

#[test]
fn join_leaves_inputs_untouched() {
    let inner = inner();
    let _ = inner.join(outer(), Filter::Absent);
    assert!(inner[0].field("department").is_undefined());
}

// ============================================================================
// max / min
// ============================================================================

#[test]
fn max_of_numeric_elements() {
    assert_eq!(basic().max(Filter::Absent), 4.0);
    assert_eq!(strings().max(Filter::Absent), -1.0);
    assert_eq!(numbers().max(Filter::Null), 1.0);
}

#[test]
fn max_with_predicate() {
    let string_len = Filter::from_fn(|item| item.as_str().map_or(-1.0, |s| s.len() as f64));
    assert_eq!(basic().max(string_len), 2.0);
    assert_eq!(staff().max(id_or(-1.0)), 5.0);
}

#[test]
fn max_with_invalid_filter() {
    assert_eq!(basic().max(1), -1.0);
    assert_eq!(basic().max("Hi"), -1.0);
    assert_eq!(basic().max(false), -1.0);
    assert_eq!(basic().max(Record::new()), -1.0);
}

#[test]
fn min_of_numeric_elements() {
    assert_eq!(basic().min(Filter::Absent), 2.0);
    assert_eq!(strings().min(Filter::Absent), f64::INFINITY);
    assert_eq!(numbers().min(Filter::Null), 1.0);
}

#[test]
fn min_with_predicate() {
    let string_len =
        Filter::from_fn(|item| item.as_str().map_or(f64::INFINITY, |s| s.len() as f64));
    assert_eq!(basic().min(string_len), 2.0);
    assert_eq!(staff().min(id_or(f64::INFINITY)), 1.0);
}

#[test]
fn min_with_invalid_filter() {
    assert_eq!(basic().min(1), f64::INFINITY);
    assert_eq!(basic().min("Hi"), f64::INFINITY);
    assert_eq!(basic().min(false), f64::INFINITY);
    assert_eq!(basic().min(Record::new()), f64::INFINITY);
}

// ============================================================================
// select
// ============================================================================

#[test]
fn select_without_predicate_returns_receiver() {
    let c = basic();
    assert_eq!(c.select(1)[1], Element::from(2));
    assert_eq!(c.select("Hi")[1], Element::from(2));
    assert_eq!(c.select(false)[1], Element::from(2));
    assert_eq!(c.select(Record::new())[1], Element::from(2));
    assert_eq!(c.select(Filter::Null)[1], Element::from(2));
}

#[test]
fn select_projects_fields() {
    let ids = staff().select(Filter::from_fn(|p| p.field("id")));
    assert_eq!(ids.len(), 6);
    assert_eq!(ids[1], Element::from(2));
    assert!(ids[3].is_undefined());
    assert!(!ids.is_hole(3));
}

#[test]
fn select_builds_new_records() {
    let jobs = staff().select(Filter::from_fn(|p| {
        Record::new().with("id", p.field("id")).with("job", p.field("role"))
    }));
    assert_eq!(jobs.len(), 6);
    assert_eq!(jobs[0].field("job"), Element::from("Engineer"));
    assert!(jobs[4].field("job").is_undefined());
}

// ============================================================================
// sum
// ============================================================================

#[test]
fn sum_of_numeric_elements() {
    assert_eq!(basic().sum(Filter::Absent), 9.0);
    assert_eq!(numbers().sum(Filter::Absent), 4.0);
    assert_eq!(strings().sum(Filter::Absent), -1.0);
}

#[test]
fn sum_with_predicate() {
    let plus_two = Filter::from_fn(|item| item.as_f64().map(|n| n + 2.0));
    let name_len = Filter::from_fn(|p| p.field("name").as_str().map(str::len));

    assert_eq!(basic().sum(plus_two), 15.0);
    assert_eq!(staff().sum(Filter::from_fn(|p| p.field("id"))), 15.0);
    assert_eq!(staff().sum(name_len), 21.0);
}

#[test]
fn sum_with_invalid_filter() {
    assert_eq!(basic().sum(1), -1.0);
    assert_eq!(basic().sum("a"), -1.0);
    assert_eq!(basic().sum(false), -1.0);
    assert_eq!(basic().sum(Record::new()), -1.0);
}

// ============================================================================
// where
// ============================================================================

#[test]
fn where_keeps_truthy_results() {
    let c = wrap(vec![1, 2, 3, 4]);

    let only_one = Filter::from_fn(|item| {
        if *item == Element::from(1) {
            item.clone()
        } else {
            Element::Undefined
        }
    });
    let not_one = Filter::from_fn(|item| {
        if *item != Element::from(1) {
            item.clone()
        } else {
            Element::Undefined
        }
    });

    assert_eq!(c.r#where(only_one).len(), 1);
    assert_eq!(c.r#where(not_one).len(), 3);
}

#[test]
fn where_over_records() {
    let family = wrap(vec![
        Record::new().with("name", "Ben").with("age", 36).with("gender", "m"),
        Record::new().with("name", "Kiersten").with("age", 33).with("gender", "f"),
        Record::new().with("name", "Tim").with("age", 12).with("gender", "m"),
        Record::new().with("name", "Hanna").with("age", 11).with("gender", "f"),
        Record::new().with("name", "Chloe").with("age", 9).with("gender", "f"),
        Record::new().with("name", "Levi").with("age", 7).with("gender", "m"),
        Record::new().with("name", "Noah").with("age", 3).with("gender", "m"),
        Record::new().with("name", "Ava").with("age", 2).with("gender", "f"),
    ]);

    let boys = family.r#where(Filter::from_fn(|p| p.field("gender") == Element::from("m")));
    assert_eq!(boys.len(), 4);
}

#[test]
fn where_without_predicate_returns_receiver() {
    let c = wrap(vec![1, 2, 3, 4]);
    assert_eq!(c.r#where(Filter::Absent).len(), c.len());
    assert_eq!(c.r#where(1).len(), c.len());
    assert_eq!(c.r#where(Record::new()).len(), c.len());
    assert_eq!(c.r#where("a").len(), c.len());
}

#[test]
fn where_skips_holes() {
    let everything = basic().r#where(Filter::from_fn(|_| true));
    assert_eq!(everything.len(), 5);
}
