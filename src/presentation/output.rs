//! Output Rendering
//!
//! Non-interactive views of a tree, walked through the tree adapter
//! contract so they show exactly what a tree view would.

use std::fmt;

use serde::Serialize;

use crate::domain::services::tree_adapter::{child_at, child_count, is_expandable};
use crate::domain::services::{NodeKind, NodeRef, SymbolTree};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented text
    #[default]
    Text,
    /// JSON outline for scripting
    Json,
}

/// One visible node and its visible children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    pub name: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

/// The visible tree as nested nodes
pub fn outline(tree: &SymbolTree) -> Vec<OutlineNode> {
    children(tree, None)
}

fn children(tree: &SymbolTree, parent: Option<NodeRef<'_>>) -> Vec<OutlineNode> {
    (0..child_count(tree, parent))
        .filter_map(|i| child_at(tree, parent, i))
        .map(|node| OutlineNode {
            name: node.display_value().to_string(),
            kind: kind_name(&node),
            children: if is_expandable(Some(node)) {
                children(tree, Some(node))
            } else {
                Vec::new()
            },
        })
        .collect()
}

fn kind_name(node: &NodeRef<'_>) -> &'static str {
    match node.kind() {
        NodeKind::Package(_) => "package",
        NodeKind::Class(_) => "class",
        NodeKind::Method { .. } => "method",
    }
}

/// Write the outline as text, two spaces per level
pub fn write_outline(nodes: &[OutlineNode], out: &mut dyn fmt::Write) -> fmt::Result {
    fn walk(nodes: &[OutlineNode], depth: usize, out: &mut dyn fmt::Write) -> fmt::Result {
        for node in nodes {
            writeln!(out, "{:width$}{}", "", node.name, width = depth * 2)?;
            walk(&node.children, depth + 1, out)?;
        }
        Ok(())
    }
    walk(nodes, 0, out)
}

/// Format the visible tree in the requested format
pub fn format_tree(tree: &SymbolTree, format: OutputFormat) -> crate::error::DexViewResult<String> {
    let nodes = outline(tree);
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            write_outline(&nodes, &mut out)?;
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&nodes)?),
    }
}
