//! Locations inside an attribute value tree.
//!
//! Conversions track where they are in the tree so that a failure deep inside
//! a nested plan names the exact attribute, e.g. `scopes[1].name` or
//! `extended_properties["group"]`. Attribute names are reported in their
//! Terraform (snake_case) form, before any renaming.

use std::fmt;

use crate::options::MappingKind;

/// One step from a parent value to a child value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named attribute of an object.
    Attribute(String),
    /// A key of a generic map.
    Key(String),
    /// A position in a list or set.
    Index(usize),
}

impl PathSegment {
    pub(crate) fn for_entry(kind: MappingKind, key: &str) -> Self {
        match kind {
            MappingKind::Object => PathSegment::Attribute(key.to_string()),
            MappingKind::Map => PathSegment::Key(key.to_string()),
        }
    }
}

/// A path from the root of a value tree. The empty path is the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrPath {
    segments: Vec<PathSegment>,
}

impl AttrPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Builder form of [`AttrPath::push`] for an object attribute.
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Attribute(name.into()));
        self
    }

    /// Builder form of [`AttrPath::push`] for a map key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Key(key.into()));
        self
    }

    /// Builder form of [`AttrPath::push`] for a list or set position.
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Attribute(name) if i == 0 => f.write_str(name)?,
                PathSegment::Attribute(name) => write!(f, ".{name}")?,
                PathSegment::Key(key) => write!(f, "[{key:?}]")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
