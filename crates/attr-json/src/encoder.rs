//! Attribute value → JSON text encoder.
//!
//! Walks an [`AttrValue`] tree and writes the JSON document a client struct
//! decoder expects:
//!
//! - **Scalars**: strings quoted with RFC 8259 escaping, booleans as literals,
//!   integers in base 10, floats as the shortest round-trip decimal without
//!   exponent (`1.0` → `1`)
//! - **Lists and sets**: `[v1,v2]` in container order
//! - **Objects and maps**: `{"key":value}` in insertion order, with snake_case
//!   keys rewritten to camelCase
//! - **Null**: `null`, or dropped from its parent mapping when
//!   [`ConvertOptions::skip_undefined_attributes`] is set
//!
//! Unknown and unsupported values are errors that carry their path, as are two
//! entries that rename to the same key; nothing is silently left out of the
//! document.
//!
//! # Example
//! ```
//! use attr_json::{to_json_string, AttrValue};
//!
//! let scopes = AttrValue::list([
//!     AttrValue::object([("name", AttrValue::from("openid")), ("dynamic", AttrValue::from(false))]),
//! ]);
//! assert_eq!(to_json_string(&scopes).unwrap(), r#"[{"name":"openid","dynamic":false}]"#);
//! ```

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::{ConvertError, Result};
use crate::options::{ConvertOptions, MappingKind};
use crate::path::{AttrPath, PathSegment};
use crate::value::AttrValue;

/// Encode an attribute value as JSON text with default options.
pub fn to_json_string(value: &AttrValue) -> Result<String> {
    to_json_string_with(value, &ConvertOptions::default())
}

/// Encode an attribute value as JSON text.
///
/// The output is a JSON fragment: a bare scalar, array or object depending on
/// the root value.
pub fn to_json_string_with(value: &AttrValue, options: &ConvertOptions) -> Result<String> {
    let mut encoder = Encoder {
        options,
        path: AttrPath::root(),
        out: String::new(),
    };
    encoder.encode_value(value)?;
    Ok(encoder.out)
}

/// Writer state for one conversion. `path` always points at the value being
/// written.
struct Encoder<'a> {
    options: &'a ConvertOptions,
    path: AttrPath,
    out: String,
}

impl Encoder<'_> {
    fn encode_value(&mut self, value: &AttrValue) -> Result<()> {
        match value {
            AttrValue::Null => self.out.push_str("null"),
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
            AttrValue::String(s) => write_string(s, &mut self.out),
            AttrValue::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            AttrValue::Int64(i) => self.out.push_str(&i.to_string()),
            AttrValue::Float64(f) => {
                let text = format_float(*f).ok_or_else(|| ConvertError::NonFiniteFloat {
                    path: self.path.clone(),
                    value: *f,
                })?;
                self.out.push_str(&text);
            }
            AttrValue::List(items) | AttrValue::Set(items) => self.encode_array(items)?,
            AttrValue::Object(attrs) => self.encode_mapping(attrs, MappingKind::Object)?,
            AttrValue::Map(entries) => self.encode_mapping(entries, MappingKind::Map)?,
        }
        Ok(())
    }

    /// `[` elements `]`, comma-separated, no trailing comma.
    fn encode_array(&mut self, items: &[AttrValue]) -> Result<()> {
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.path.push(PathSegment::Index(i));
            self.encode_value(item)?;
            self.path.pop();
        }
        self.out.push(']');
        Ok(())
    }

    /// `{` `"key":value` pairs `}` in insertion order. Skipped entries leave
    /// no separator behind.
    fn encode_mapping(&mut self, entries: &IndexMap<String, AttrValue>, kind: MappingKind) -> Result<()> {
        self.out.push('{');
        let mut written: HashSet<String> = HashSet::with_capacity(entries.len());
        for (key, value) in entries {
            self.path.push(PathSegment::for_entry(kind, key));
            if self.options.includes(value, &self.path) {
                let out_key = self.options.output_key(key, kind);
                if written.contains(&*out_key) {
                    return Err(ConvertError::DuplicateKey {
                        path: self.path.clone(),
                        key: out_key.into_owned(),
                    });
                }
                if !written.is_empty() {
                    self.out.push(',');
                }
                write_string(&out_key, &mut self.out);
                written.insert(out_key.into_owned());
                self.out.push(':');
                self.encode_value(value)?;
            }
            self.path.pop();
        }
        self.out.push('}');
        Ok(())
    }
}

/// Format a float as the shortest decimal that parses back to the same value,
/// never in exponent form. `None` for NaN and infinities.
///
/// Rust's `Display` for `f64` already produces shortest round-trip digits in
/// positional notation, so `1.0` → `1`, `1e21` → `1000000000000000000000`,
/// `1e-7` → `0.0000001`.
pub(crate) fn format_float(f: f64) -> Option<String> {
    if !f.is_finite() {
        return None;
    }
    Some(f.to_string())
}

/// Write a quoted JSON string. Quote, backslash and all control characters
/// below U+0020 are escaped.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
