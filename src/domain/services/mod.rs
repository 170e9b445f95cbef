//! Domain Services
//!
//! - `symbol_tree` - Builds the package/class/method tree and runs search filtering
//! - `tree_adapter` - The dense-index query contract consumed by tree views

mod symbol_tree;
pub mod tree_adapter;

pub use symbol_tree::SymbolTree;
pub use tree_adapter::{NodeKind, NodeRef};
