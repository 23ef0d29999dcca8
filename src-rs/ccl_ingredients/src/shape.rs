//! Classification of raw JSON into the supported list shapes.
//!
//! Ingredient lists arrive either as an object keyed by id or as an array of
//! entries, and each entry may be a bare string or a data object. The
//! inspectors here sort a raw value into one of those shapes up front so the
//! normalizer can match on them.

use serde_json::{Map, Value};

/// The top-level shape of an ingredient list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListShape<'a> {
    /// An absent list (`null`), treated as empty
    Absent,
    /// Keys are ids, values are entries
    Object(&'a Map<String, Value>),
    /// Each element is an entry
    Array(&'a [Value]),
}

/// An entry of an object-form list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectEntry<'a> {
    /// A serving string
    Serving(&'a str),
    /// A data object with optional name and serving
    Data(&'a Map<String, Value>),
}

/// An entry of an array-form list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayEntry<'a> {
    /// A display name
    Name(&'a str),
    /// A data object with an id and/or a name, and an optional serving
    Data(&'a Map<String, Value>),
}

/// Classifies a list. Returns `None` for scalars.
#[must_use]
pub fn inspect_list(raw: &Value) -> Option<ListShape<'_>> {
    match raw {
        Value::Null => Some(ListShape::Absent),
        Value::Object(map) => Some(ListShape::Object(map)),
        Value::Array(entries) => Some(ListShape::Array(entries)),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

/// Classifies an object-form entry. Returns `None` for other value types.
#[must_use]
pub fn inspect_object_entry(raw: &Value) -> Option<ObjectEntry<'_>> {
    match raw {
        Value::String(serving) => Some(ObjectEntry::Serving(serving)),
        Value::Object(data) => Some(ObjectEntry::Data(data)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => None,
    }
}

/// Classifies an array-form entry. Returns `None` for other value types.
#[must_use]
pub fn inspect_array_entry(raw: &Value) -> Option<ArrayEntry<'_>> {
    match raw {
        Value::String(name) => Some(ArrayEntry::Name(name)),
        Value::Object(data) => Some(ArrayEntry::Data(data)),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => None,
    }
}
