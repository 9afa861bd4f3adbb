//! Attribute naming conventions.
//!
//! Terraform schemas name attributes in snake_case; the PingFederate API and
//! its generated client use camelCase field names. Only mapping keys are
//! renamed, never string values.

use std::borrow::Cow;

/// Convert a snake_case attribute name into the camelCase field name.
///
/// Single left-to-right scan: each `_` is dropped and arms an upper-case flag
/// that applies to the next non-underscore character. Consecutive underscores
/// therefore upper-case one character (`a__b` → `aB`), a leading underscore
/// upper-cases the first letter (`_foo` → `Foo`), and a trailing underscore
/// disappears (`foo_` → `foo`). Names without underscores are borrowed as-is.
/// Upper-casing never changes the character count: characters whose upper case
/// is a sequence (`ß` → `SS`) are kept unchanged.
///
/// ```
/// use attr_json::underscore_to_camel_case;
///
/// assert_eq!(underscore_to_camel_case("source_ref"), "sourceRef");
/// assert_eq!(underscore_to_camel_case("id"), "id");
/// ```
pub fn underscore_to_camel_case(key: &str) -> Cow<'_, str> {
    if !key.contains('_') {
        return Cow::Borrowed(key);
    }
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(upper_one(ch));
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Single-character upper case, or `ch` itself when there is none.
fn upper_one(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}
