//! Symbol tree model
//!
//! Groups a flat [`SymbolSource`] into packages, classes and methods, and
//! keeps one visibility filter per level:
//!
//! - the root filter over packages (owned here)
//! - one filter per package over its classes
//! - one filter per class over its methods
//!
//! Search only ever propagates matches upward: a matching method reveals
//! its class and package, a matching class reveals its package, but a
//! matching package or class never forces its children visible.

use std::collections::HashMap;

use crate::domain::entities::{ClassNode, NodeId, PackageNode, SymbolSource};
use crate::domain::services::tree_adapter::NodeRef;
use crate::domain::value_objects::{QualifiedName, VisibilityFilter};

/// The package/class/method tree with its per-level filters
#[derive(Debug, Clone, Default)]
pub struct SymbolTree {
    packages: Vec<PackageNode>,
    filter: VisibilityFilter,
}

impl SymbolTree {
    /// An empty tree (no source loaded yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fully visible tree from a source
    pub fn build(source: &SymbolSource) -> Self {
        let mut packages: Vec<PackageNode> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for record in &source.classes {
            let name = match QualifiedName::parse(&record.qualified_name) {
                Ok(name) => name,
                Err(err) => {
                    tracing::warn!(%err, "using whole name as display name");
                    QualifiedName::split(&record.qualified_name)
                }
            };
            let package_name = name.package();
            let index = match by_name.get(package_name) {
                Some(&index) => index,
                None => {
                    packages.push(PackageNode::new(package_name));
                    by_name.insert(package_name.to_string(), packages.len() - 1);
                    packages.len() - 1
                }
            };
            packages[index].push_class(ClassNode::named(record.clone(), name.display_name()));
        }

        packages.sort_by(|a, b| a.name().cmp(b.name()));
        for package in &mut packages {
            package.init_filter();
        }

        let filter = VisibilityFilter::new(packages.len(), true);
        tracing::debug!(
            classes = source.classes.len(),
            packages = packages.len(),
            "built symbol tree"
        );

        Self { packages, filter }
    }

    /// Replace the whole tree with one built from `source`.
    ///
    /// The new tree is built before anything is replaced, so no partially
    /// built state is ever reachable through `self`.
    pub fn load(&mut self, source: &SymbolSource) {
        *self = Self::build(source);
    }

    /// Recompute every filter from a clean slate for a case-insensitive
    /// substring search.
    pub fn apply_filter(&mut self, query: &str) {
        let needle = query.to_lowercase();
        let matches = |haystack: &str| haystack.to_lowercase().contains(&needle);

        let mut root_mask = Vec::with_capacity(self.packages.len());
        for package in &mut self.packages {
            let mut class_mask = Vec::with_capacity(package.classes.len());

            for class in &mut package.classes {
                let method_mask: Vec<bool> = class
                    .methods
                    .iter()
                    .map(|method| matches(&method.record.name))
                    .collect();
                let any_method = method_mask.iter().any(|hit| *hit);
                class.filter = VisibilityFilter::from_mask(method_mask);

                class_mask.push(any_method || matches(&class.record.qualified_name));
            }

            let any_class = class_mask.iter().any(|hit| *hit);
            package.filter = VisibilityFilter::from_mask(class_mask);

            root_mask.push(any_class || matches(&package.name));
        }
        self.filter = VisibilityFilter::from_mask(root_mask);

        tracing::debug!(
            query,
            visible_packages = self.filter.true_count(),
            "applied filter"
        );
    }

    /// Make every node at every level visible again
    pub fn reset_filter(&mut self) {
        self.filter.set_all(true);
        for package in &mut self.packages {
            package.filter.set_all(true);
            for class in &mut package.classes {
                class.filter.set_all(true);
            }
        }
    }

    /// Number of visible packages
    pub fn child_count(&self) -> usize {
        self.filter.true_count()
    }

    /// The `dense_index`-th visible package
    pub fn child_at(&self, dense_index: usize) -> Option<NodeRef<'_>> {
        let index = self.filter.map_dense_index(dense_index)?;
        self.node(NodeId::Package(index))
    }

    /// All packages, visible or not, sorted by name
    pub fn packages(&self) -> &[PackageNode] {
        &self.packages
    }

    /// The root filter over packages
    pub fn filter(&self) -> &VisibilityFilter {
        &self.filter
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Resolve an id to a node, regardless of visibility
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        match id {
            NodeId::Package(p) => {
                let package = self.packages.get(p)?;
                Some(NodeRef::package(p, package))
            }
            NodeId::Class(p, c) => {
                let class = self.packages.get(p)?.classes.get(c)?;
                Some(NodeRef::class(p, c, class))
            }
            NodeId::Method(p, c, m) => {
                let class = self.packages.get(p)?.classes.get(c)?;
                let method = class.methods.get(m)?;
                Some(NodeRef::method(p, c, m, class, method))
            }
        }
    }

    /// Whether the node's slot and every ancestor slot are set
    pub fn is_visible(&self, id: NodeId) -> bool {
        match id {
            NodeId::Package(p) => self.filter.is_visible(p),
            NodeId::Class(p, c) => {
                self.is_visible(NodeId::Package(p))
                    && self.packages[p].filter.is_visible(c)
            }
            NodeId::Method(p, c, m) => {
                self.is_visible(NodeId::Class(p, c))
                    && self.packages[p].classes[c].filter.is_visible(m)
            }
        }
    }

    /// Every visible node in display order (packages, then their classes,
    /// then their methods)
    pub fn visible_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        for p in self.filter.visible_indices() {
            ids.push(NodeId::Package(p));
            let package = &self.packages[p];
            for c in package.filter.visible_indices() {
                ids.push(NodeId::Class(p, c));
                for m in package.classes[c].filter.visible_indices() {
                    ids.push(NodeId::Method(p, c, m));
                }
            }
        }
        ids
    }

    /// Locate a class by its fully-qualified name
    pub fn find_class(&self, qualified_name: &str) -> Option<NodeId> {
        let package_name = QualifiedName::split(qualified_name).package();
        let p = self
            .packages
            .binary_search_by(|package| package.name().cmp(package_name))
            .ok()?;
        let c = self.packages[p]
            .classes
            .iter()
            .position(|class| class.qualified_name() == qualified_name)?;
        Some(NodeId::Class(p, c))
    }

    /// Locate the first method named `name` in a class
    pub fn find_method(&self, class: NodeId, name: &str) -> Option<NodeId> {
        let NodeId::Class(p, c) = class else {
            return None;
        };
        let m = self
            .packages
            .get(p)?
            .classes
            .get(c)?
            .methods
            .iter()
            .position(|method| method.display_name() == name)?;
        Some(NodeId::Method(p, c, m))
    }
}
