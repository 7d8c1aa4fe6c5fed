#![deny(missing_docs)]

//! # Slicer Core
//!
//! Core library for slicing OpenAPI documents: given a regular expression
//! over path strings, extracts the matching path items plus every schema,
//! parameter, response and request body they transitively reference, and
//! rebuilds a smaller, still-valid document.

/// Shared error types.
pub mod error;

/// File loading and serialization.
pub mod document;

/// `$ref` string helpers.
pub mod refs;

/// Dependency closure traversal.
pub mod resolver;

/// Path map filtering.
pub mod selector;

/// Output document assembly.
pub mod splice;

/// The public slicer facade.
pub mod slicer;

pub use document::SpecFormat;
pub use error::{AppError, AppResult};
pub use resolver::{ResolveContext, COMPONENT_CATEGORIES};
pub use slicer::{OpenapiSlicer, VERSION};
