//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod renderer;
pub mod symbol_loader;

pub use renderer::{BoundRenderer, Renderer};
pub use symbol_loader::SymbolLoader;
