#![deny(missing_docs)]

//! # Dependency Resolution
//!
//! Walks the selected operations to the fixed point of their `$ref`
//! closure, collecting component names and tag names.
//!
//! Handles:
//! - Parameter references (`parameters[].$ref`).
//! - Response references, both response-level and per media type
//!   (`responses.*.$ref`, `responses.*.content.*.schema.$ref`).
//! - Nested schema references via `properties` and `allOf`.
//! - Cyclic reference graphs, terminated by the visited-name set.
//! - Dangling references, tolerated and dropped silently.

use crate::refs::{component_name, ref_of};
use indexmap::IndexSet;
use serde_json::{Map, Value};

/// The component categories understood by the slicer, in lookup priority
/// order.
///
/// A name collision across categories resolves to the first hit, so
/// changing this order changes observable output. The same order drives
/// output assembly.
pub const COMPONENT_CATEGORIES: [&str; 4] =
    ["schemas", "responses", "parameters", "requestBodies"];

/// Mutable traversal state threaded through the reference walk.
///
/// Created fresh per `filter` call and discarded after slicing.
#[derive(Debug, Default)]
pub struct ResolveContext {
    /// Names of every component transitively reachable from the selected
    /// operations, in discovery order. Doubles as the visited set that
    /// terminates cyclic walks; a dangling name stays in here as a visited
    /// marker but never reaches the output.
    pub components: IndexSet<String>,
    /// Tag names referenced by any selected operation.
    pub tags: IndexSet<String>,
}

impl ResolveContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Collects component and tag dependencies from every operation of every
/// selected path item.
pub fn collect_dependencies(spec: &Value, paths: &Map<String, Value>, ctx: &mut ResolveContext) {
    for item in paths.values() {
        let Some(operations) = item.as_object() else {
            continue;
        };
        for operation in operations.values() {
            collect_from_operation(spec, operation, ctx);
        }
    }
}

fn collect_from_operation(spec: &Value, operation: &Value, ctx: &mut ResolveContext) {
    if let Some(parameters) = operation.get("parameters").and_then(Value::as_array) {
        for parameter in parameters {
            if let Some(ref_str) = ref_of(parameter) {
                resolve_ref(spec, ref_str, ctx);
            }
        }
    }

    if let Some(responses) = operation.get("responses").and_then(Value::as_object) {
        for response in responses.values() {
            resolve_response_refs(spec, response, ctx);
        }
    }

    // Tag collection is independent of the reference walk and happens even
    // for operations with no references at all.
    if let Some(tags) = operation.get("tags").and_then(Value::as_array) {
        for tag in tags {
            if let Some(name) = tag.as_str() {
                ctx.tags.insert(name.to_string());
            }
        }
    }
}

/// Resolves one `$ref` and recurses into the referenced component's
/// `properties` and `allOf` entries.
///
/// The visited set is the sole termination guard for cyclic graphs. Other
/// composition keywords (`oneOf`, `anyOf`, `items`, `additionalProperties`)
/// are not walked.
fn resolve_ref(spec: &Value, ref_str: &str, ctx: &mut ResolveContext) {
    let name = component_name(ref_str);
    if !ctx.components.insert(name.to_string()) {
        return;
    }

    // Dangling reference: visited marker stays, nothing to recurse into.
    let Some(component) = lookup_component(spec, name) else {
        return;
    };

    if let Some(properties) = component.get("properties").and_then(Value::as_object) {
        for property in properties.values() {
            if let Some(nested) = ref_of(property) {
                resolve_ref(spec, nested, ctx);
            }
        }
    }

    if let Some(all_of) = component.get("allOf").and_then(Value::as_array) {
        for entry in all_of {
            if let Some(nested) = ref_of(entry) {
                resolve_ref(spec, nested, ctx);
            }
        }
    }
}

/// Resolves a response's own `$ref` plus each media type's `schema` `$ref`.
///
/// A response can thus contribute two distinct chains: the response-level
/// reference and one per media type.
fn resolve_response_refs(spec: &Value, response: &Value, ctx: &mut ResolveContext) {
    if let Some(ref_str) = ref_of(response) {
        resolve_ref(spec, ref_str, ctx);
    }

    if let Some(content) = response.get("content").and_then(Value::as_object) {
        for media_type in content.values() {
            if let Some(ref_str) = media_type.get("schema").and_then(ref_of) {
                resolve_ref(spec, ref_str, ctx);
            }
        }
    }
}

/// Looks a component up by bare name, probing categories in
/// `COMPONENT_CATEGORIES` order and returning the first hit.
fn lookup_component<'a>(spec: &'a Value, name: &str) -> Option<&'a Value> {
    let components = spec.get("components")?;
    COMPONENT_CATEGORIES
        .iter()
        .find_map(|category| components.get(*category)?.get(name))
}
