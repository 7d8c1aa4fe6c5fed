#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for reading local `$ref` pointers. Resolution is by bare
//! component name only: `#/components/schemas/Pet` and
//! `#/components/responses/Pet` identify the same name `Pet`.

use serde_json::Value;

/// Extracts the component name from a `$ref` string.
///
/// The name is the segment after the final `/`. A string with no `/` is
/// returned whole; such a name fails every category lookup downstream and
/// degrades to a dangling reference.
pub fn component_name(ref_str: &str) -> &str {
    ref_str.rsplit_once('/').map_or(ref_str, |(_, name)| name)
}

/// Returns the `$ref` string of a mapping node, if present.
pub fn ref_of(value: &Value) -> Option<&str> {
    value.get("$ref").and_then(Value::as_str)
}
