//! Linqed - Declarative query operations over ordered collections.
//!
//! Linqed wraps an ordered sequence of dynamically typed elements and adds
//! a family of query operations to it. The wrapped value still behaves like
//! the plain sequence: it has a length, can be indexed and iterated, and
//! serializes to exactly the same JSON array. It supports:
//!
//! - Filtering and projection: `where`, `select`, `first`, `first_or_default`
//! - Membership and predicates: `all`, `contains`
//! - Set-style operations: `distinct`, `except`, `intersect`, `union`
//! - Joins between record collections: `join`
//! - Arithmetic aggregates: `sum`, `average`, `max`, `min`
//!
//! # Quick Start
//!
//! ```rust
//! use linqed::{wrap, Element, Filter, Record};
//!
//! let staff = wrap(vec![
//!     Record::new().with("name", "Ben").with("id", 1).with("role", "Engineer"),
//!     Record::new().with("name", "Rob").with("id", 2).with("role", "CSR"),
//!     Record::new().with("name", "Tom").with("role", "Owner"),
//! ]);
//!
//! // Keep records that have an id
//! let with_id = staff.r#where(Filter::from_fn(|p| !p.field("id").is_undefined()));
//! assert_eq!(with_id.len(), 2);
//!
//! // Project a field
//! let names = staff.select(Filter::from_fn(|p| p.field("name")));
//! assert_eq!(names[2], Element::from("Tom"));
//!
//! // Aggregate over a projection
//! let letters = staff.sum(Filter::from_fn(|p| p.field("name").as_str().map_or(0, str::len)));
//! assert_eq!(letters, 9.0);
//! ```
//!
//! # Filters
//!
//! Every operation takes a single [`Filter`] argument whose *kind* selects
//! the behavior. Anything convertible into a filter can be passed directly:
//!
//! | Kind | Built from |
//! |------|------------|
//! | `Absent` | `Filter::Absent`, `None` |
//! | `Null` | `Filter::Null`, `Element::Null` |
//! | `Value` | numbers, `bool`, `&str`, `String` |
//! | `Predicate` | `Filter::from_fn(..)` |
//! | `Collection` | `Vec<T>`, [`Collection`], [`List`] |
//! | `Record` | [`Record`] |
//!
//! A string value also names a field for the operations that accept a key
//! name (`distinct` and `join`); [`Filter::key`] spells that intent out.
//!
//! Operations never fail. A filter kind an operation does not support
//! produces that operation's documented default value, and a few also emit
//! a diagnostic through [`tracing`](https://docs.rs/tracing) when the
//! `diagnostics` feature is enabled (the default).
//!
//! # Equality
//!
//! All comparisons use strict equality: primitives by value, records and
//! lists by identity. See [`Element`] for details.

mod aggregate;
mod collection;
mod element;
mod error;
mod filter;
mod json;
mod query;
mod relational;

// Re-export public API
pub use collection::{wrap, Collection, IntoIter, Iter};
pub use element::{Element, List, Record};
pub use error::{CollectionError, Result};
pub use filter::{Filter, Predicate, Primitive};
