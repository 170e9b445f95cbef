//! Symbol source loaders
//!
//! Implementations of the `SymbolLoader` port.

pub mod json;

pub use json::JsonSymbolLoader;
