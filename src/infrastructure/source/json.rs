//! JSON symbol source
//!
//! Reads the `{ "classes": [...] }` dump written by the external parser.

use std::fs;
use std::path::Path;

use crate::domain::entities::SymbolSource;
use crate::domain::ports::SymbolLoader;
use crate::error::{DexViewError, DexViewResult};

/// Loads a [`SymbolSource`] from a JSON file
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSymbolLoader;

impl JsonSymbolLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a JSON document that is already in memory
    pub fn parse(&self, content: &str, path: &Path) -> DexViewResult<SymbolSource> {
        serde_json::from_str(content).map_err(|e| DexViewError::InvalidSource {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl SymbolLoader for JsonSymbolLoader {
    fn load(&self, path: &Path) -> DexViewResult<SymbolSource> {
        let content = fs::read_to_string(path).map_err(|e| DexViewError::InvalidSource {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let source = self.parse(&content, path)?;
        tracing::info!(
            path = %path.display(),
            classes = source.classes.len(),
            "loaded symbol source"
        );
        Ok(source)
    }
}
