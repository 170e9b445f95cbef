//! Domain Entities
//!
//! - `SymbolSource` - The parsed symbol table supplied by an external parser
//! - `PackageNode` / `ClassNode` / `MethodNode` - Tree nodes built from a source

mod symbol;
mod tree_node;

pub use symbol::{ClassRecord, FieldRecord, MethodRecord, ParameterRecord, SymbolSource};
pub use tree_node::{ClassNode, MethodNode, NodeId, PackageNode, DEFAULT_PACKAGE};
