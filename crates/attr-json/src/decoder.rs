//! Client JSON → attribute value decoder.
//!
//! Used when an API response is written back into Terraform state. JSON does
//! not distinguish lists from sets or integers from floats, and the client
//! struct may carry fields the schema never models, so decoding is driven by
//! an [`AttrType`]:
//!
//! - Object attributes are looked up under their camelCase field name. A
//!   missing field becomes [`AttrValue::Null`]; extra fields are ignored.
//! - Map keys are user data and are copied verbatim.
//! - `null` decodes to [`AttrValue::Null`] whatever the type.
//! - Sets are deduplicated.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::{ConvertError, Result};
use crate::naming::underscore_to_camel_case;
use crate::path::{AttrPath, PathSegment};
use crate::types::AttrType;
use crate::value::AttrValue;

/// Decode JSON text into an attribute value of the given type.
pub fn from_json_str(json: &str, ty: &AttrType) -> Result<AttrValue> {
    let value: Value = serde_json::from_str(json)?;
    from_json_value(&value, ty)
}

/// Decode a JSON value into an attribute value of the given type.
///
/// ```
/// use attr_json::{from_json_value, AttrType, AttrValue};
/// use serde_json::json;
///
/// let response = json!({"id": "pcv1", "location": "https://pf/pcv/pcv1", "etag": 7});
/// let state = from_json_value(&response, &AttrType::resource_link()).unwrap();
/// assert_eq!(state.get("id"), Some(&AttrValue::from("pcv1")));
/// ```
pub fn from_json_value(json: &Value, ty: &AttrType) -> Result<AttrValue> {
    Decoder {
        path: AttrPath::root(),
    }
    .decode(json, ty)
}

/// Serialize a client struct and decode it into an attribute value.
pub fn from_client<T: Serialize>(client: &T, ty: &AttrType) -> Result<AttrValue> {
    let json = serde_json::to_value(client)?;
    from_json_value(&json, ty)
}

struct Decoder {
    path: AttrPath,
}

impl Decoder {
    fn decode(&mut self, json: &Value, ty: &AttrType) -> Result<AttrValue> {
        match (ty, json) {
            (_, Value::Null) => Ok(AttrValue::Null),
            (AttrType::String, Value::String(s)) => Ok(AttrValue::String(s.clone())),
            (AttrType::Bool, Value::Bool(b)) => Ok(AttrValue::Bool(*b)),
            (AttrType::Int64, Value::Number(n)) => self.decode_integer(n),
            (AttrType::Float64, Value::Number(n)) => n
                .as_f64()
                .map(AttrValue::Float64)
                .ok_or_else(|| self.mismatch(ty, json)),
            (AttrType::List(element), Value::Array(items)) => {
                Ok(AttrValue::List(self.decode_elements(items, element)?))
            }
            (AttrType::Set(element), Value::Array(items)) => {
                Ok(AttrValue::set(self.decode_elements(items, element)?))
            }
            (AttrType::Map(element), Value::Object(fields)) => self.decode_map(fields, element),
            (AttrType::Object(attrs), Value::Object(fields)) => self.decode_object(fields, attrs),
            _ => Err(self.mismatch(ty, json)),
        }
    }

    fn decode_integer(&self, n: &Number) -> Result<AttrValue> {
        if let Some(i) = n.as_i64() {
            return Ok(AttrValue::Int64(i));
        }
        if n.is_u64() {
            return Err(ConvertError::IntegerOutOfRange {
                path: self.path.clone(),
                value: n.to_string(),
            });
        }
        Err(ConvertError::TypeMismatch {
            path: self.path.clone(),
            expected: AttrType::Int64.name(),
            found: "float",
        })
    }

    fn decode_elements(&mut self, items: &[Value], element: &AttrType) -> Result<Vec<AttrValue>> {
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            self.path.push(PathSegment::Index(i));
            out.push(self.decode(item, element)?);
            self.path.pop();
        }
        Ok(out)
    }

    fn decode_map(&mut self, fields: &Map<String, Value>, element: &AttrType) -> Result<AttrValue> {
        let mut out = IndexMap::with_capacity(fields.len());
        for (key, field) in fields {
            self.path.push(PathSegment::Key(key.clone()));
            out.insert(key.clone(), self.decode(field, element)?);
            self.path.pop();
        }
        Ok(AttrValue::Map(out))
    }

    fn decode_object(&mut self, fields: &Map<String, Value>, attrs: &IndexMap<String, AttrType>) -> Result<AttrValue> {
        let mut out = IndexMap::with_capacity(attrs.len());
        let mut matched = 0;
        for (name, attr_ty) in attrs {
            self.path.push(PathSegment::Attribute(name.clone()));
            let value = match fields.get(&*underscore_to_camel_case(name)) {
                Some(field) => {
                    matched += 1;
                    self.decode(field, attr_ty)?
                }
                None => AttrValue::Null,
            };
            self.path.pop();
            out.insert(name.clone(), value);
        }
        if matched < fields.len() {
            tracing::trace!(
                path = %self.path,
                ignored = fields.len() - matched,
                "ignoring response fields not in schema"
            );
        }
        Ok(AttrValue::Object(out))
    }

    fn mismatch(&self, ty: &AttrType, json: &Value) -> ConvertError {
        ConvertError::TypeMismatch {
            path: self.path.clone(),
            expected: ty.name(),
            found: json_kind(json),
        }
    }
}

fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
