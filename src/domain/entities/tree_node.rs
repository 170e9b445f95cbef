//! Tree nodes - packages, classes and methods built from a symbol source
//!
//! Each non-leaf node owns a [`VisibilityFilter`] over its children. Nodes
//! are built once per load and discarded wholesale on the next one.

use crate::domain::entities::{ClassRecord, MethodRecord};
use crate::domain::value_objects::{QualifiedName, VisibilityFilter};

/// Package name for classes whose name has no separator
pub const DEFAULT_PACKAGE: &str = "default";

/// Stable identity of a node by underlying (not dense) indices.
///
/// Ids stay valid across filter changes and are invalidated by a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Package(usize),
    Class(usize, usize),
    Method(usize, usize, usize),
}

impl NodeId {
    /// The id of the owning node, `None` for packages
    pub fn parent(&self) -> Option<NodeId> {
        match *self {
            NodeId::Package(_) => None,
            NodeId::Class(p, _) => Some(NodeId::Package(p)),
            NodeId::Method(p, c, _) => Some(NodeId::Class(p, c)),
        }
    }

    /// Nesting depth below the root (packages are 0)
    pub fn depth(&self) -> usize {
        match self {
            NodeId::Package(_) => 0,
            NodeId::Class(..) => 1,
            NodeId::Method(..) => 2,
        }
    }
}

/// Classes grouped under one package name
#[derive(Debug, Clone)]
pub struct PackageNode {
    pub(crate) name: String,
    pub(crate) classes: Vec<ClassNode>,
    pub(crate) filter: VisibilityFilter,
}

impl PackageNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
            filter: VisibilityFilter::default(),
        }
    }

    pub(crate) fn push_class(&mut self, class: ClassNode) {
        self.classes.push(class);
    }

    /// Size the class filter to the current class list, all visible
    pub(crate) fn init_filter(&mut self) {
        self.filter = VisibilityFilter::new(self.classes.len(), true);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[ClassNode] {
        &self.classes
    }

    pub fn filter(&self) -> &VisibilityFilter {
        &self.filter
    }
}

/// A class and its methods
#[derive(Debug, Clone)]
pub struct ClassNode {
    pub(crate) display_name: String,
    pub(crate) record: ClassRecord,
    pub(crate) methods: Vec<MethodNode>,
    pub(crate) filter: VisibilityFilter,
}

impl ClassNode {
    pub fn new(record: ClassRecord) -> Self {
        let display_name = QualifiedName::split(&record.qualified_name)
            .display_name()
            .to_string();
        Self::named(record, display_name)
    }

    /// Node with a display name already split off by the caller
    pub(crate) fn named(record: ClassRecord, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let methods: Vec<MethodNode> = record
            .methods
            .iter()
            .cloned()
            .map(MethodNode::new)
            .collect();
        let filter = VisibilityFilter::new(methods.len(), true);

        Self {
            display_name,
            record,
            methods,
            filter,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn qualified_name(&self) -> &str {
        &self.record.qualified_name
    }

    pub fn record(&self) -> &ClassRecord {
        &self.record
    }

    pub fn methods(&self) -> &[MethodNode] {
        &self.methods
    }

    pub fn filter(&self) -> &VisibilityFilter {
        &self.filter
    }
}

/// A method leaf
#[derive(Debug, Clone)]
pub struct MethodNode {
    pub(crate) display_name: String,
    pub(crate) record: MethodRecord,
}

impl MethodNode {
    pub fn new(record: MethodRecord) -> Self {
        Self {
            display_name: record.name.clone(),
            record,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn record(&self) -> &MethodRecord {
        &self.record
    }
}
