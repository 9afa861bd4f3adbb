//! Error types for attribute value conversions.

use crate::path::AttrPath;
use thiserror::Error;

/// Errors that can occur while converting between attribute values and JSON.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// JSON text could not be parsed, or a JSON value did not fit the
    /// requested client struct.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An unknown (not yet computed) value reached the output.
    #[error("value at {path} is unknown and has no JSON representation")]
    UnknownValue { path: AttrPath },

    /// A framework value with no JSON shape (tuple, dynamic, custom type).
    #[error("value at {path} has unsupported type `{type_name}`")]
    Unsupported { path: AttrPath, type_name: String },

    /// NaN and infinities cannot be written as JSON numbers.
    #[error("float at {path} is not finite: {value}")]
    NonFiniteFloat { path: AttrPath, value: f64 },

    /// Two entries of one mapping produce the same JSON key after renaming
    /// (`a_b` and `aB`).
    #[error("key {key:?} at {path} collides with an earlier entry of the same mapping")]
    DuplicateKey { path: AttrPath, key: String },

    /// Decoding found a JSON value of the wrong shape for the attribute type.
    #[error("expected {expected} at {path}, found JSON {found}")]
    TypeMismatch {
        path: AttrPath,
        expected: &'static str,
        found: &'static str,
    },

    /// A JSON integer outside the signed 64-bit range.
    #[error("integer at {path} does not fit in int64: {value}")]
    IntegerOutOfRange { path: AttrPath, value: String },
}

impl ConvertError {
    /// Location of the offending value, when the error is tied to one.
    pub fn path(&self) -> Option<&AttrPath> {
        match self {
            ConvertError::Json(_) => None,
            ConvertError::UnknownValue { path }
            | ConvertError::Unsupported { path, .. }
            | ConvertError::NonFiniteFloat { path, .. }
            | ConvertError::DuplicateKey { path, .. }
            | ConvertError::TypeMismatch { path, .. }
            | ConvertError::IntegerOutOfRange { path, .. } => Some(path),
        }
    }
}

/// Convenience alias used throughout attr-json.
pub type Result<T> = std::result::Result<T, ConvertError>;
