#![deny(missing_docs)]

//! # Path Selection
//!
//! Filters the document's path map by a regular expression matched against
//! the path keys.

use regex::Regex;
use serde_json::{Map, Value};

/// Returns the subset of `paths` whose key matches `regex` anywhere.
///
/// Search semantics, not full-match; curly-brace template parameters are
/// matched literally as characters. Source key order is preserved.
pub fn select_paths(paths: &Map<String, Value>, regex: &Regex) -> Map<String, Value> {
    paths
        .iter()
        .filter(|(path, _)| regex.is_match(path))
        .map(|(path, item)| (path.clone(), item.clone()))
        .collect()
}
