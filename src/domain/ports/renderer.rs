//! Renderer port - pluggable writers that turn records into text
//!
//! A renderer never sees the tree or its filters. It receives the record to
//! render plus the source it belongs to, and writes into a sink.

use std::fmt;

use crate::domain::entities::{ClassRecord, MethodRecord, SymbolSource};
use crate::domain::value_objects::{DisplayOptions, Indentation};
use crate::error::DexViewResult;

/// A target-language writer.
///
/// Implementations must be stateless with respect to the loaded source: the
/// source is passed in on every call and must not be mutated.
pub trait Renderer: Send + Sync {
    /// Stable display name used for selection
    fn name(&self) -> &str;

    /// Render a whole class, honoring each display flag independently
    fn render_class(
        &self,
        source: &SymbolSource,
        class: &ClassRecord,
        options: DisplayOptions,
        out: &mut dyn fmt::Write,
    ) -> DexViewResult<()>;

    /// Render one method at the given nesting depth.
    ///
    /// `standalone` is set when the method is shown on its own rather than
    /// inside its class.
    fn render_method(
        &self,
        source: &SymbolSource,
        class: &ClassRecord,
        method: &MethodRecord,
        out: &mut dyn fmt::Write,
        indent: Indentation,
        standalone: bool,
    ) -> DexViewResult<()>;
}

/// A renderer paired with the source it renders from.
///
/// The lifetime ties the handle to the source, so a handle can never be
/// used against a source that has since been replaced.
#[derive(Clone, Copy)]
pub struct BoundRenderer<'a> {
    renderer: &'a dyn Renderer,
    source: &'a SymbolSource,
}

impl<'a> BoundRenderer<'a> {
    pub fn new(renderer: &'a dyn Renderer, source: &'a SymbolSource) -> Self {
        Self { renderer, source }
    }

    pub fn name(&self) -> &'a str {
        self.renderer.name()
    }

    pub fn source(&self) -> &'a SymbolSource {
        self.source
    }

    pub fn render_class(
        &self,
        class: &ClassRecord,
        options: DisplayOptions,
        out: &mut dyn fmt::Write,
    ) -> DexViewResult<()> {
        self.renderer.render_class(self.source, class, options, out)
    }

    pub fn render_method(
        &self,
        class: &ClassRecord,
        method: &MethodRecord,
        out: &mut dyn fmt::Write,
        indent: Indentation,
        standalone: bool,
    ) -> DexViewResult<()> {
        self.renderer
            .render_method(self.source, class, method, out, indent, standalone)
    }

    /// Render a class into a fresh string
    pub fn class_to_string(
        &self,
        class: &ClassRecord,
        options: DisplayOptions,
    ) -> DexViewResult<String> {
        let mut out = String::new();
        self.render_class(class, options, &mut out)?;
        Ok(out)
    }

    /// Render a standalone method into a fresh string
    pub fn method_to_string(
        &self,
        class: &ClassRecord,
        method: &MethodRecord,
    ) -> DexViewResult<String> {
        let mut out = String::new();
        self.render_method(class, method, &mut out, Indentation::new(), true)?;
        Ok(out)
    }
}

impl fmt::Debug for BoundRenderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundRenderer")
            .field("renderer", &self.renderer.name())
            .field("classes", &self.source.classes.len())
            .finish()
    }
}
