//! Conversion settings.

use std::borrow::Cow;

use crate::naming::underscore_to_camel_case;
use crate::path::AttrPath;
use crate::value::AttrValue;

/// Settings shared by the text encoder and the value transcoder.
///
/// ```
/// use attr_json::ConvertOptions;
///
/// let options = ConvertOptions::new()
///     .skip_undefined_attributes(true)
///     .rename_map_keys(false);
/// assert!(options.skips_undefined_attributes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    skip_undefined_attributes: bool,
    rename_map_keys: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            skip_undefined_attributes: false,
            rename_map_keys: true,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop object attributes and map entries whose value is null or unknown
    /// instead of writing `null` (or failing on unknown). List and set
    /// elements are never dropped.
    pub fn skip_undefined_attributes(mut self, skip: bool) -> Self {
        self.skip_undefined_attributes = skip;
        self
    }

    /// Apply the camelCase transform to generic map keys as well as object
    /// attribute names. When off, map keys are written verbatim.
    pub fn rename_map_keys(mut self, rename: bool) -> Self {
        self.rename_map_keys = rename;
        self
    }

    pub fn skips_undefined_attributes(&self) -> bool {
        self.skip_undefined_attributes
    }

    pub fn renames_map_keys(&self) -> bool {
        self.rename_map_keys
    }

    /// The JSON key written for a mapping entry.
    pub(crate) fn output_key<'k>(&self, key: &'k str, kind: MappingKind) -> Cow<'k, str> {
        match kind {
            MappingKind::Object => underscore_to_camel_case(key),
            MappingKind::Map if self.rename_map_keys => underscore_to_camel_case(key),
            MappingKind::Map => Cow::Borrowed(key),
        }
    }

    /// Whether a mapping entry is written at all.
    pub(crate) fn includes(&self, value: &AttrValue, path: &AttrPath) -> bool {
        if self.skip_undefined_attributes && !value.is_defined() {
            tracing::trace!(%path, kind = value.type_name(), "skipping undefined entry");
            return false;
        }
        true
    }
}

/// Which kind of mapping an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MappingKind {
    Object,
    Map,
}
