//! Direct structural mapping from attribute values into `serde_json`.
//!
//! Produces the same document as [`crate::encoder`], but as a
//! `serde_json::Value`, which lets handlers deserialize a plan straight into a
//! generated client struct without going through text.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

use crate::error::{ConvertError, Result};
use crate::options::{ConvertOptions, MappingKind};
use crate::path::{AttrPath, PathSegment};
use crate::value::AttrValue;

/// Convert an attribute value into a `serde_json::Value`.
///
/// Key renaming and the null/unknown/unsupported policy are identical to
/// [`crate::to_json_string_with`]; parsing that function's output yields this
/// value.
pub fn to_json_value(value: &AttrValue, options: &ConvertOptions) -> Result<Value> {
    Transcoder {
        options,
        path: AttrPath::root(),
    }
    .transcode(value)
}

/// Deserialize an attribute value into a client struct.
///
/// ```
/// use attr_json::{to_client, AttrValue, ConvertOptions};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// #[serde(rename_all = "camelCase")]
/// struct PersistentGrantContract {
///     extended_attributes: Vec<String>,
/// }
///
/// let plan = AttrValue::object([(
///     "extended_attributes",
///     AttrValue::set([AttrValue::from("department")]),
/// )]);
/// let contract: PersistentGrantContract = to_client(&plan, &ConvertOptions::default()).unwrap();
/// assert_eq!(contract.extended_attributes, ["department"]);
/// ```
pub fn to_client<T: DeserializeOwned>(value: &AttrValue, options: &ConvertOptions) -> Result<T> {
    let json = to_json_value(value, options)?;
    serde_json::from_value(json).map_err(|err| {
        tracing::debug!(error = %err, "attribute value does not fit client type");
        ConvertError::Json(err)
    })
}

struct Transcoder<'a> {
    options: &'a ConvertOptions,
    path: AttrPath,
}

impl Transcoder<'_> {
    fn transcode(&mut self, value: &AttrValue) -> Result<Value> {
        let json = match value {
            AttrValue::Null => Value::Null,
            AttrValue::Unknown => {
                return Err(ConvertError::UnknownValue {
                    path: self.path.clone(),
                })
            }
            AttrValue::Unsupported(type_name) => {
                return Err(ConvertError::Unsupported {
                    path: self.path.clone(),
                    type_name: type_name.clone(),
                })
            }
            AttrValue::String(s) => Value::String(s.clone()),
            AttrValue::Bool(b) => Value::Bool(*b),
            AttrValue::Int64(i) => Value::Number((*i).into()),
            AttrValue::Float64(f) => {
                let number = Number::from_f64(*f).ok_or_else(|| ConvertError::NonFiniteFloat {
                    path: self.path.clone(),
                    value: *f,
                })?;
                Value::Number(number)
            }
            AttrValue::List(items) | AttrValue::Set(items) => {
                let mut array = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    self.path.push(PathSegment::Index(i));
                    array.push(self.transcode(item)?);
                    self.path.pop();
                }
                Value::Array(array)
            }
            AttrValue::Object(attrs) => self.transcode_mapping(attrs, MappingKind::Object)?,
            AttrValue::Map(entries) => self.transcode_mapping(entries, MappingKind::Map)?,
        };
        Ok(json)
    }

    fn transcode_mapping(&mut self, entries: &IndexMap<String, AttrValue>, kind: MappingKind) -> Result<Value> {
        let mut map = Map::new();
        for (key, value) in entries {
            self.path.push(PathSegment::for_entry(kind, key));
            if self.options.includes(value, &self.path) {
                let out_key = self.options.output_key(key, kind).into_owned();
                if map.contains_key(&out_key) {
                    return Err(ConvertError::DuplicateKey {
                        path: self.path.clone(),
                        key: out_key,
                    });
                }
                let json = self.transcode(value)?;
                map.insert(out_key, json);
            }
            self.path.pop();
        }
        Ok(Value::Object(map))
    }
}
