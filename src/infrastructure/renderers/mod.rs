//! Renderers
//!
//! Concrete implementations of the `Renderer` port, plus the registry that
//! resolves them by display name.

pub mod java;
pub mod smali;

pub use java::JavaRenderer;
pub use smali::SmaliRenderer;

use crate::domain::entities::SymbolSource;
use crate::domain::ports::{BoundRenderer, Renderer};
use crate::error::{DexViewError, DexViewResult};

/// Renderers in registration order
pub struct RendererRegistry {
    renderers: Vec<Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            renderers: Vec::new(),
        }
    }

    /// Registry with every built-in renderer (Java first)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(JavaRenderer::new()));
        registry.register(Box::new(SmaliRenderer::new()));
        registry
    }

    /// Add a renderer; a renderer with the same name is replaced in place
    pub fn register(&mut self, renderer: Box<dyn Renderer>) {
        match self
            .renderers
            .iter()
            .position(|r| r.name() == renderer.name())
        {
            Some(index) => self.renderers[index] = renderer,
            None => self.renderers.push(renderer),
        }
    }

    /// Display names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.renderers.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Look up a renderer by name.
    ///
    /// An exact match wins; otherwise the first case-insensitive match is used.
    pub fn get(&self, name: &str) -> DexViewResult<&dyn Renderer> {
        self.renderers
            .iter()
            .find(|r| r.name() == name)
            .or_else(|| {
                self.renderers
                    .iter()
                    .find(|r| r.name().eq_ignore_ascii_case(name))
            })
            .map(|r| r.as_ref())
            .ok_or_else(|| DexViewError::UnknownRenderer {
                name: name.to_string(),
            })
    }

    /// Pair a renderer with the source it will read from
    pub fn bind<'a>(
        &'a self,
        name: &str,
        source: &'a SymbolSource,
    ) -> DexViewResult<BoundRenderer<'a>> {
        let renderer = self.get(name)?;
        tracing::debug!(renderer = renderer.name(), "bound renderer");
        Ok(BoundRenderer::new(renderer, source))
    }

    /// Name registered after `current`, wrapping around.
    ///
    /// Unknown names restart at the first renderer.
    pub fn next_name(&self, current: &str) -> Option<&str> {
        let names = self.names();
        let next = match names.iter().position(|n| n.eq_ignore_ascii_case(current)) {
            Some(index) => (index + 1) % names.len(),
            None => 0,
        };
        names.get(next).copied()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ClassRecord, MethodRecord};
    use crate::domain::value_objects::{DisplayOptions, Indentation};
    use std::fmt;

    struct Stub(&'static str);

    impl Renderer for Stub {
        fn name(&self) -> &str {
            self.0
        }

        fn render_class(
            &self,
            _source: &SymbolSource,
            _class: &ClassRecord,
            _options: DisplayOptions,
            out: &mut dyn fmt::Write,
        ) -> DexViewResult<()> {
            out.write_str("stub")?;
            Ok(())
        }

        fn render_method(
            &self,
            _source: &SymbolSource,
            _class: &ClassRecord,
            _method: &MethodRecord,
            _out: &mut dyn fmt::Write,
            _indent: Indentation,
            _standalone: bool,
        ) -> DexViewResult<()> {
            Ok(())
        }
    }

    #[test]
    fn defaults_register_java_then_smali() {
        let registry = RendererRegistry::with_defaults();

        assert_eq!(registry.names(), vec!["Java", "Smali"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn get_returns_named_renderer() {
        let registry = RendererRegistry::with_defaults();

        assert_eq!(registry.get("Smali").unwrap().name(), "Smali");
        assert_eq!(registry.get("java").unwrap().name(), "Java");
    }

    #[test]
    fn get_unknown_fails() {
        let registry = RendererRegistry::with_defaults();

        match registry.get("Unknown") {
            Err(DexViewError::UnknownRenderer { name }) => assert_eq!(name, "Unknown"),
            other => panic!("expected UnknownRenderer, got {:?}", other.map(|r| r.name())),
        }
        assert!(!registry.contains("Unknown"));
    }

    #[test]
    fn register_replaces_same_name_in_place() {
        let mut registry = RendererRegistry::with_defaults();
        registry.register(Box::new(Stub("Java")));

        assert_eq!(registry.names(), vec!["Java", "Smali"]);
        let source = SymbolSource::new(vec![ClassRecord::new("a.B")]);
        let bound = registry.bind("Java", &source).unwrap();
        assert_eq!(
            bound
                .class_to_string(&source.classes[0], DisplayOptions::all())
                .unwrap(),
            "stub"
        );
    }

    #[test]
    fn bind_ties_renderer_to_source() {
        let registry = RendererRegistry::with_defaults();
        let source = SymbolSource::new(vec![ClassRecord::new("a.B")]);

        let bound = registry.bind("Smali", &source).unwrap();
        assert_eq!(bound.name(), "Smali");
        assert!(std::ptr::eq(bound.source(), &source));
        assert!(registry.bind("Kotlin", &source).is_err());
    }

    #[test]
    fn next_name_wraps_around() {
        let registry = RendererRegistry::with_defaults();

        assert_eq!(registry.next_name("Java"), Some("Smali"));
        assert_eq!(registry.next_name("Smali"), Some("Java"));
        assert_eq!(registry.next_name("Kotlin"), Some("Java"));
        assert_eq!(RendererRegistry::new().next_name("Java"), None);
    }
}
