//! Attribute values as held by Terraform resource handlers.
//!
//! Mirrors the plugin framework's value model: scalars, list/set sequences,
//! object/map mappings, plus the framework's null and unknown states. Mappings
//! use `IndexMap` so that conversion output follows insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A concrete or partially known Terraform attribute value.
///
/// The serde form is adjacently tagged so trees can live in fixture files:
/// `{"type": "object", "value": {"id": {"type": "string", "value": "abc"}}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttrValue {
    /// Explicitly null.
    Null,
    /// Not yet known (computed during apply).
    Unknown,
    String(String),
    Bool(bool),
    Int64(i64),
    Float64(f64),
    /// Ordered sequence.
    List(Vec<AttrValue>),
    /// Sequence with set semantics. Build through [`AttrValue::set`] to
    /// deduplicate; the serde form is deduplicated on the way in.
    #[serde(deserialize_with = "deserialize_set")]
    Set(Vec<AttrValue>),
    /// Generic string-keyed map (user data keys).
    Map(IndexMap<String, AttrValue>),
    /// Record with schema-defined snake_case attribute names.
    Object(IndexMap<String, AttrValue>),
    /// A framework value with no JSON shape; carries the framework type name.
    Unsupported(String),
}

impl AttrValue {
    pub fn list(items: impl IntoIterator<Item = AttrValue>) -> Self {
        AttrValue::List(items.into_iter().collect())
    }

    /// Build a set, keeping the first occurrence of each equal element.
    pub fn set(items: impl IntoIterator<Item = AttrValue>) -> Self {
        AttrValue::Set(dedup(items))
    }

    pub fn object<K: Into<String>>(attrs: impl IntoIterator<Item = (K, AttrValue)>) -> Self {
        AttrValue::Object(attrs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, AttrValue)>) -> Self {
        AttrValue::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn empty_list() -> Self {
        AttrValue::List(Vec::new())
    }

    pub fn empty_set() -> Self {
        AttrValue::Set(Vec::new())
    }

    pub fn empty_map() -> Self {
        AttrValue::Map(IndexMap::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, AttrValue::Unknown)
    }

    /// Neither null nor unknown.
    pub fn is_defined(&self) -> bool {
        !self.is_null() && !self.is_unknown()
    }

    /// Short lowercase name of the variant, as used in the serde tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::Unknown => "unknown",
            AttrValue::String(_) => "string",
            AttrValue::Bool(_) => "bool",
            AttrValue::Int64(_) => "int64",
            AttrValue::Float64(_) => "float64",
            AttrValue::List(_) => "list",
            AttrValue::Set(_) => "set",
            AttrValue::Map(_) => "map",
            AttrValue::Object(_) => "object",
            AttrValue::Unsupported(_) => "unsupported",
        }
    }

    /// Attribute of an object value, if this is an object and it has one.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        match self {
            AttrValue::Object(attrs) => attrs.get(name),
            _ => None,
        }
    }
}

fn dedup(items: impl IntoIterator<Item = AttrValue>) -> Vec<AttrValue> {
    let mut unique: Vec<AttrValue> = Vec::new();
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

fn deserialize_set<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<AttrValue>, D::Error> {
    Vec::<AttrValue>::deserialize(deserializer).map(dedup)
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int64(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float64(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Null, Into::into)
    }
}
