#![deny(missing_docs)]

//! # Slicer Facade
//!
//! The public entry point: loads a spec file, filters its paths by a
//! regular expression, and rebuilds a minimal self-contained document
//! containing every transitively referenced component and tag.

use crate::document::{load_document, write_document, SpecFormat};
use crate::error::{AppError, AppResult};
use crate::resolver::{collect_dependencies, ResolveContext};
use crate::selector::select_paths;
use crate::splice::splice;
use regex::Regex;
use serde_json::Value;
use std::path::Path;

/// The current version of the slicer.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Slices an OpenAPI spec down to the paths matching a regular expression
/// plus every component they transitively depend on.
///
/// The document is read once at construction and held immutably for the
/// slicer's lifetime; `filter` and `export` never mutate it.
#[derive(Debug)]
pub struct OpenapiSlicer {
    spec: Value,
}

impl OpenapiSlicer {
    /// Loads the spec at `path`.
    ///
    /// Fails with `AppError::InvalidFileType` unless the extension is
    /// `.json`, `.yml` or `.yaml`; parse failures propagate unchanged.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let spec = load_document(path.as_ref())?;
        Ok(Self { spec })
    }

    /// Read-only access to the loaded document.
    pub fn spec(&self) -> &Value {
        &self.spec
    }

    /// Filters paths by `regex` and returns the sliced document in memory.
    ///
    /// The source document must have a `paths` mapping; its absence is a
    /// caller contract violation reported as `AppError::General`.
    pub fn filter(&self, regex: &Regex) -> AppResult<Value> {
        let paths = self
            .spec
            .get("paths")
            .and_then(Value::as_object)
            .ok_or_else(|| AppError::General("document has no 'paths' object".into()))?;

        // 1. Select paths
        let selected = select_paths(paths, regex);

        // 2. Walk the reference closure
        let mut ctx = ResolveContext::new();
        collect_dependencies(&self.spec, &selected, &mut ctx);

        // 3. Assemble the output
        Ok(splice(&self.spec, selected, &ctx))
    }

    /// Filters and writes the sliced document to `target`, with the format
    /// chosen by the target's extension. Overwrites any existing file.
    pub fn export(&self, regex: &Regex, target: impl AsRef<Path>) -> AppResult<()> {
        let target = target.as_ref();
        // Reject unsupported targets before doing any work
        SpecFormat::from_path(target)?;

        let result = self.filter(regex)?;
        write_document(target, &result)
    }
}
