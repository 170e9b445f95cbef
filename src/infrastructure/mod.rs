//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `renderers/` - Java and Smali renderers plus the renderer registry
//! - `source/` - Symbol source loaders (JSON)

pub mod renderers;
pub mod source;

// Re-export for convenience
pub use renderers::{JavaRenderer, RendererRegistry, SmaliRenderer};
pub use source::JsonSymbolLoader;
