//! SymbolLoader port - abstraction for obtaining a parsed symbol table
//!
//! Parsing `.dex`/`.apk` files happens outside DexView; a loader only
//! turns whatever the external parser produced into a [`SymbolSource`].

use std::path::Path;

use crate::domain::entities::SymbolSource;
use crate::error::DexViewResult;

/// Abstract source of symbol tables
pub trait SymbolLoader {
    /// Load a complete symbol source; partial results are never returned
    fn load(&self, path: &Path) -> DexViewResult<SymbolSource>;
}
