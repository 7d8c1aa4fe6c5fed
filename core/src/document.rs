#![deny(missing_docs)]

//! # Document I/O
//!
//! Loads and writes OpenAPI documents as untyped JSON trees. The on-disk
//! format is chosen by file extension; YAML input is deserialized into
//! `serde_json::Value` so both formats share one traversal representation.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serialization format of a spec file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    /// `.json`
    Json,
    /// `.yml` / `.yaml`
    Yaml,
}

impl SpecFormat {
    /// Determines the format from a file path's extension.
    ///
    /// Returns `AppError::InvalidFileType` for anything other than `.json`,
    /// `.yml` or `.yaml`.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            _ => Err(AppError::InvalidFileType(path.display().to_string())),
        }
    }
}

/// Reads and parses a spec file into an untyped document tree.
///
/// The extension is checked before the file is opened, so an unsupported
/// path fails without touching the filesystem.
pub fn load_document(path: &Path) -> AppResult<Value> {
    let format = SpecFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    match format {
        SpecFormat::Json => serde_json::from_str(&content)
            .map_err(|e| AppError::Parse(format!("failed to parse JSON: {}", e))),
        SpecFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| AppError::Parse(format!("failed to parse YAML: {}", e))),
    }
}

/// Serializes a document to `path`, format chosen by the target extension.
///
/// Overwrites any existing file at that path.
pub fn write_document(path: &Path, document: &Value) -> AppResult<()> {
    let format = SpecFormat::from_path(path)?;
    let serialized = match format {
        SpecFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|e| AppError::Parse(format!("failed to serialize JSON: {}", e)))?,
        SpecFormat::Yaml => serde_yaml::to_string(document)
            .map_err(|e| AppError::Parse(format!("failed to serialize YAML: {}", e)))?,
    };
    fs::write(path, serialized)?;
    Ok(())
}
