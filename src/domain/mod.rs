//! Domain Layer
//!
//! The core of DexView: the filtered symbol tree, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Symbol records and the Package/Class/Method tree nodes
//! - `value_objects/` - Immutable value types (VisibilityFilter, DisplayOptions, Indentation)
//! - `services/` - The symbol tree model and the tree adapter contract
//! - `ports/` - Interface definitions for renderers and symbol loaders
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Single owner** - A tree and its filters are mutated only through `&mut SymbolTree`
//! 3. **Ports & Adapters** - Renderers and loaders go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
