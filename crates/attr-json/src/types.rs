//! Attribute types describing the expected shape of a value.
//!
//! The decoder needs a type to tell lists from sets, integers from floats and
//! to know which attributes an object carries; JSON alone cannot say.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Schema type of an attribute. Object attribute names are snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "of", rename_all = "snake_case")]
pub enum AttrType {
    String,
    Bool,
    Int64,
    Float64,
    List(Box<AttrType>),
    Set(Box<AttrType>),
    Map(Box<AttrType>),
    Object(IndexMap<String, AttrType>),
}

impl AttrType {
    pub fn list(element: AttrType) -> Self {
        AttrType::List(Box::new(element))
    }

    pub fn set(element: AttrType) -> Self {
        AttrType::Set(Box::new(element))
    }

    pub fn map(element: AttrType) -> Self {
        AttrType::Map(Box::new(element))
    }

    pub fn object<K: Into<String>>(attrs: impl IntoIterator<Item = (K, AttrType)>) -> Self {
        AttrType::Object(attrs.into_iter().map(|(k, t)| (k.into(), t)).collect())
    }

    /// The `{id, location}` reference object the API uses to point at other
    /// configuration entities.
    pub fn resource_link() -> Self {
        AttrType::object([("id", AttrType::String), ("location", AttrType::String)])
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttrType::String => "string",
            AttrType::Bool => "bool",
            AttrType::Int64 => "int64",
            AttrType::Float64 => "float64",
            AttrType::List(_) => "list",
            AttrType::Set(_) => "set",
            AttrType::Map(_) => "map",
            AttrType::Object(_) => "object",
        }
    }
}
