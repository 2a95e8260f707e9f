//! Serialization and JSON interop.
//!
//! A collection serializes exactly like the plain array it wraps, so
//! exporting one never leaks anything but its elements:
//!
//! - holes and `Undefined` array entries become `null`
//! - record fields holding `Undefined` are left out
//! - integral numbers are written without a fraction, non-finite ones as `null`
//!
//! ```
//! use linqed::{wrap, Element, Record};
//!
//! let c = wrap(vec![
//!     Element::from(1),
//!     Element::Undefined,
//!     Record::new().with("a", 2.5).with("b", Element::Undefined).into(),
//! ]);
//!
//! assert_eq!(serde_json::to_string(&c).unwrap(), r#"[1,null,{"a":2.5}]"#);
//! ```

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::collection::Collection;
use crate::element::{Element, List, Record};
use crate::error::{CollectionError, Result};

/// Largest magnitude at which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Element::Undefined | Element::Null => serializer.serialize_unit(),
            Element::Bool(b) => serializer.serialize_bool(*b),
            Element::Number(n) => serialize_number(*n, serializer),
            Element::String(s) => serializer.serialize_str(s),
            Element::Record(record) => record.serialize(serializer),
            Element::List(list) => list.serialize(serializer),
        }
    }
}

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if !n.is_finite() {
        serializer.serialize_unit()
    } else if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let fields: Vec<(&str, &Element)> =
            self.iter().filter(|(_, value)| !value.is_undefined()).collect();

        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (key, value) in fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Element::from)
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Collection::try_from(value).map_err(D::Error::custom)
    }
}

/// Every JSON object and array becomes a fresh record or list.
impl From<Value> for Element {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Element::Null,
            Value::Bool(b) => Element::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Element::Null, Element::Number),
            Value::String(s) => Element::String(s),
            Value::Array(items) => Element::List(items.into_iter().collect()),
            Value::Object(fields) => Element::Record(fields.into_iter().collect()),
        }
    }
}

impl TryFrom<Value> for Collection {
    type Error = CollectionError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(items.into_iter().collect()),
            other => Err(CollectionError::NotASequence {
                found: json_type_name(&other),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Collection {
    /// Parses JSON text holding an array.
    ///
    /// ```
    /// use linqed::{Collection, Filter};
    ///
    /// let c = Collection::from_json_str(r#"[{"id": 1}, {"id": 2}, {"id": 1}]"#).unwrap();
    /// assert_eq!(c.distinct(Filter::key("id")).len(), 2);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Collection::try_from(value)
    }

    /// Serializes the collection to JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Converts the collection into a JSON value.
    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
