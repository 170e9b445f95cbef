//! Browse session
//!
//! Owns one loaded source, its tree, and the renderer selection. Front ends
//! (the terminal browser, the `tree` and `render` commands) drive a session
//! instead of touching the tree and registry directly.

use std::path::Path;

use crate::domain::entities::{NodeId, SymbolSource};
use crate::domain::ports::{BoundRenderer, SymbolLoader};
use crate::domain::services::{NodeKind, NodeRef, SymbolTree};
use crate::domain::value_objects::DisplayOptions;
use crate::error::{DexViewError, DexViewResult};
use crate::infrastructure::RendererRegistry;

/// Render whatever node is selected.
///
/// Packages have no rendering and yield `None`. Methods are rendered on
/// their own, prefixed with the owning class.
pub fn render_selection(
    renderer: BoundRenderer<'_>,
    node: NodeRef<'_>,
    options: DisplayOptions,
) -> DexViewResult<Option<String>> {
    match node.kind() {
        NodeKind::Package(_) => Ok(None),
        NodeKind::Class(class) => renderer.class_to_string(class.record(), options).map(Some),
        NodeKind::Method { class, method } => renderer
            .method_to_string(class.record(), method.record())
            .map(Some),
    }
}

#[derive(Debug)]
pub struct BrowseSession {
    source: SymbolSource,
    tree: SymbolTree,
    registry: RendererRegistry,
    renderer: String,
    options: DisplayOptions,
    search: String,
}

impl BrowseSession {
    /// Start an empty session; fails if `renderer` is not registered
    pub fn new(
        registry: RendererRegistry,
        renderer: &str,
        options: DisplayOptions,
    ) -> DexViewResult<Self> {
        let renderer = registry.get(renderer)?.name().to_string();
        Ok(Self {
            source: SymbolSource::default(),
            tree: SymbolTree::new(),
            registry,
            renderer,
            options,
            search: String::new(),
        })
    }

    /// Replace the loaded source and clear the search
    pub fn open(&mut self, source: SymbolSource) {
        let tree = SymbolTree::build(&source);
        self.source = source;
        self.tree = tree;
        self.search.clear();
    }

    /// Load through `loader` and open the result.
    ///
    /// On failure the previous source and tree stay in place.
    pub fn open_path(&mut self, loader: &dyn SymbolLoader, path: &Path) -> DexViewResult<()> {
        let source = loader.load(path)?;
        self.open(source);
        Ok(())
    }

    /// Filter the tree; an empty query shows everything again
    pub fn set_search(&mut self, query: &str) {
        if query.is_empty() {
            self.tree.reset_filter();
        } else {
            self.tree.apply_filter(query);
        }
        self.search = query.to_string();
    }

    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Switch renderers by name, keeping the current one on failure
    pub fn select_renderer(&mut self, name: &str) -> DexViewResult<()> {
        let renderer = self.registry.get(name)?;
        self.renderer = renderer.name().to_string();
        Ok(())
    }

    /// Advance to the next registered renderer and return its name
    pub fn cycle_renderer(&mut self) -> &str {
        if let Some(next) = self.registry.next_name(&self.renderer) {
            self.renderer = next.to_string();
        }
        &self.renderer
    }

    pub fn renderer_name(&self) -> &str {
        &self.renderer
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    pub fn set_options(&mut self, options: DisplayOptions) {
        self.options = options;
    }

    pub fn source(&self) -> &SymbolSource {
        &self.source
    }

    pub fn tree(&self) -> &SymbolTree {
        &self.tree
    }

    /// The current renderer bound to the loaded source
    pub fn bound_renderer(&self) -> DexViewResult<BoundRenderer<'_>> {
        self.registry.bind(&self.renderer, &self.source)
    }

    /// Render the node behind `id`; packages yield `None`
    pub fn render(&self, id: NodeId) -> DexViewResult<Option<String>> {
        let node = self.tree.node(id).ok_or_else(|| DexViewError::SymbolNotFound {
            name: format!("{:?}", id),
        })?;
        render_selection(self.bound_renderer()?, node, self.options)
    }

    /// Class node by fully-qualified name
    pub fn find_class(&self, qualified_name: &str) -> DexViewResult<NodeId> {
        self.tree
            .find_class(qualified_name)
            .ok_or_else(|| DexViewError::SymbolNotFound {
                name: qualified_name.to_string(),
            })
    }

    /// Method node by class and method name
    pub fn find_method(&self, qualified_name: &str, method: &str) -> DexViewResult<NodeId> {
        let class = self.find_class(qualified_name)?;
        self.tree
            .find_method(class, method)
            .ok_or_else(|| DexViewError::SymbolNotFound {
                name: format!("{}.{}", qualified_name, method),
            })
    }
}
