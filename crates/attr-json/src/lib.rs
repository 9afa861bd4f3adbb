//! # attr-json
//!
//! Conversion between Terraform plugin attribute values and the JSON documents
//! understood by the PingFederate configuration API client.
//!
//! Resource handlers hold plan and state data as [`AttrValue`] trees whose
//! attribute names are snake_case. The generated REST client structs expect
//! camelCase JSON. This crate walks the tree, renames mapping keys on the way
//! and produces either JSON text, a `serde_json::Value`, or a client struct
//! directly. The reverse direction decodes API responses back into attribute
//! values, guided by an [`AttrType`].
//!
//! ## Quick start
//!
//! ```rust
//! use attr_json::{to_json_string, AttrValue};
//!
//! let plan = AttrValue::object([
//!     ("source_ref", AttrValue::object([("id", AttrValue::from("abc"))])),
//! ]);
//! assert_eq!(to_json_string(&plan).unwrap(), r#"{"sourceRef":{"id":"abc"}}"#);
//! ```
//!
//! ## Modules
//!
//! - [`encoder`] — `AttrValue` → JSON text
//! - [`transcode`] — `AttrValue` → `serde_json::Value` / client struct
//! - [`decoder`] — client JSON → `AttrValue`
//! - [`naming`] — snake_case → camelCase key transform
//! - [`value`] / [`types`] — attribute values and attribute types
//! - [`options`] — conversion settings
//! - [`path`] — locations inside a value tree, used in errors
//! - [`error`] — error types for conversion failures

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod naming;
pub mod options;
pub mod path;
pub mod transcode;
pub mod types;
pub mod value;

pub use decoder::{from_client, from_json_str, from_json_value};
pub use encoder::{to_json_string, to_json_string_with};
pub use error::ConvertError;
pub use naming::underscore_to_camel_case;
pub use options::ConvertOptions;
pub use path::{AttrPath, PathSegment};
pub use transcode::{to_client, to_json_value};
pub use types::AttrType;
pub use value::AttrValue;
