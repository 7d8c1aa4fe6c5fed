#![deny(missing_docs)]

//! # Spec Slicing
//!
//! Assembles the minimal output document from the selected paths and the
//! resolved dependency closure. The source document is never mutated; every
//! retained entry is cloned into a freshly built tree.

use crate::resolver::{ResolveContext, COMPONENT_CATEGORIES};
use serde_json::{Map, Value};

/// Builds the sliced document.
///
/// `openapi` and `info` are copied verbatim. `components` is always present
/// (empty when the source has none); each category key appears iff the
/// source has it, filtered to names in the dependency set, source order
/// preserved. `tags` and `servers` are emitted only when present upstream.
pub fn splice(spec: &Value, paths: Map<String, Value>, ctx: &ResolveContext) -> Value {
    let mut result = Map::new();
    result.insert(
        "openapi".to_string(),
        spec.get("openapi").cloned().unwrap_or(Value::Null),
    );
    result.insert(
        "info".to_string(),
        spec.get("info").cloned().unwrap_or(Value::Null),
    );
    result.insert("paths".to_string(), Value::Object(paths));
    result.insert(
        "components".to_string(),
        Value::Object(splice_components(spec, ctx)),
    );
    if let Some(tags) = spec.get("tags").and_then(Value::as_array) {
        result.insert("tags".to_string(), Value::Array(splice_tags(tags, ctx)));
    }
    if let Some(servers) = spec.get("servers") {
        result.insert("servers".to_string(), servers.clone());
    }
    Value::Object(result)
}

/// Retains, per category, the entries whose name is in the dependency set.
///
/// Names visited for dangling references have no source entry and thus
/// never appear here.
fn splice_components(spec: &Value, ctx: &ResolveContext) -> Map<String, Value> {
    let mut sliced = Map::new();
    for category in COMPONENT_CATEGORIES {
        let Some(entries) = spec
            .get("components")
            .and_then(|components| components.get(category))
            .and_then(Value::as_object)
        else {
            continue;
        };

        let kept: Map<String, Value> = entries
            .iter()
            .filter(|(name, _)| ctx.components.contains(name.as_str()))
            .map(|(name, data)| (name.clone(), data.clone()))
            .collect();
        sliced.insert(category.to_string(), Value::Object(kept));
    }
    sliced
}

/// Retains the source tag entries whose `name` is in the tag set, in
/// source order.
fn splice_tags(tags: &[Value], ctx: &ResolveContext) -> Vec<Value> {
    tags.iter()
        .filter(|tag| {
            tag.get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| ctx.tags.contains(name))
        })
        .cloned()
        .collect()
}
