//! Tree adapter contract
//!
//! The four queries a virtualized tree view makes on every repaint:
//! child count, display value, child at a dense index, and expandability.
//! Node kinds are a tagged variant dispatched in one place; `None` stands
//! for the (never displayed) root.

use crate::domain::entities::{ClassNode, MethodNode, NodeId, PackageNode};
use crate::domain::services::SymbolTree;

/// Borrowed payload of a node, by kind
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    Package(&'a PackageNode),
    Class(&'a ClassNode),
    Method {
        class: &'a ClassNode,
        method: &'a MethodNode,
    },
}

/// A node of a [`SymbolTree`] together with its stable id
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    id: NodeId,
    kind: NodeKind<'a>,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn package(p: usize, node: &'a PackageNode) -> Self {
        Self {
            id: NodeId::Package(p),
            kind: NodeKind::Package(node),
        }
    }

    pub(crate) fn class(p: usize, c: usize, node: &'a ClassNode) -> Self {
        Self {
            id: NodeId::Class(p, c),
            kind: NodeKind::Class(node),
        }
    }

    pub(crate) fn method(
        p: usize,
        c: usize,
        m: usize,
        class: &'a ClassNode,
        method: &'a MethodNode,
    ) -> Self {
        Self {
            id: NodeId::Method(p, c, m),
            kind: NodeKind::Method { class, method },
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind<'a> {
        self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Method { .. })
    }

    /// Number of visible children
    pub fn child_count(&self) -> usize {
        match self.kind {
            NodeKind::Package(package) => package.filter.true_count(),
            NodeKind::Class(class) => class.filter.true_count(),
            NodeKind::Method { .. } => 0,
        }
    }

    /// Label shown in the tree row
    pub fn display_value(&self) -> &'a str {
        match self.kind {
            NodeKind::Package(package) => package.name(),
            NodeKind::Class(class) => class.display_name(),
            NodeKind::Method { method, .. } => method.display_name(),
        }
    }

    /// The `dense_index`-th visible child
    pub fn child_at(&self, dense_index: usize) -> Option<NodeRef<'a>> {
        match (self.kind, self.id) {
            (NodeKind::Package(package), NodeId::Package(p)) => {
                let c = package.filter.map_dense_index(dense_index)?;
                Some(NodeRef::class(p, c, package.classes.get(c)?))
            }
            (NodeKind::Class(class), NodeId::Class(p, c)) => {
                let m = class.filter.map_dense_index(dense_index)?;
                Some(NodeRef::method(p, c, m, class, class.methods.get(m)?))
            }
            _ => None,
        }
    }

    /// True iff the node has at least one visible child; methods never do
    pub fn is_expandable(&self) -> bool {
        !self.is_leaf() && self.child_count() > 0
    }
}

/// Child count of `parent`, or of the root when `None`
pub fn child_count(tree: &SymbolTree, parent: Option<NodeRef<'_>>) -> usize {
    match parent {
        None => tree.child_count(),
        Some(node) => node.child_count(),
    }
}

/// Label of a node; the root has none
pub fn display_value<'a>(node: Option<NodeRef<'a>>) -> Option<&'a str> {
    node.map(|n| n.display_value())
}

/// Visible child of `parent` (or of the root) at a dense index
pub fn child_at<'a>(
    tree: &'a SymbolTree,
    parent: Option<NodeRef<'a>>,
    dense_index: usize,
) -> Option<NodeRef<'a>> {
    match parent {
        None => tree.child_at(dense_index),
        Some(node) => node.child_at(dense_index),
    }
}

/// Expandability as asked by the view; the root row and leaves never expand
pub fn is_expandable(node: Option<NodeRef<'_>>) -> bool {
    match node {
        None => false,
        Some(node) if node.is_leaf() => false,
        Some(node) => node.is_expandable(),
    }
}
