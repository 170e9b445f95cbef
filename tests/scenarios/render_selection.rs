//! Choosing a renderer and rendering the selected node.

use dexview::domain::entities::NodeId;
use dexview::{
    BrowseSession, DexViewError, DisplayOptions, JavaRenderer, RendererRegistry, SymbolSource,
};

use crate::common::sample_source;

fn session(renderer: &str) -> BrowseSession {
    let mut session =
        BrowseSession::new(RendererRegistry::with_defaults(), renderer, DisplayOptions::all())
            .unwrap();
    session.open(sample_source());
    session
}

#[test]
fn unknown_renderer_is_rejected() {
    let registry = RendererRegistry::with_defaults();

    assert!(matches!(
        registry.get("Unknown"),
        Err(DexViewError::UnknownRenderer { .. })
    ));
    assert!(matches!(
        BrowseSession::new(registry, "Unknown", DisplayOptions::all()),
        Err(DexViewError::UnknownRenderer { .. })
    ));
}

#[test]
fn java_with_all_flags_off_still_renders() {
    let registry = RendererRegistry::with_defaults();
    let source = sample_source();
    let bound = registry.bind(JavaRenderer::NAME, &source).unwrap();

    let rendered = bound
        .class_to_string(&source.classes[0], DisplayOptions::empty())
        .unwrap();
    assert!(!rendered.contains("class B"));
    assert!(rendered.contains("foo("));
}

#[test]
fn package_selection_renders_nothing() {
    let session = session("Java");

    assert_eq!(session.render(NodeId::Package(0)).unwrap(), None);
}

#[test]
fn class_and_method_render_through_selected_renderer() {
    let mut session = session("Java");
    let class = session.find_class("a.B").unwrap();
    let java = session.render(class).unwrap().unwrap();
    assert!(java.contains("class B {"));

    assert_eq!(session.cycle_renderer(), "Smali");
    let smali = session.render(class).unwrap().unwrap();
    assert!(smali.starts_with(".class La/B;"));

    let method = session.find_method("a.B", "bar").unwrap();
    let rendered = session.render(method).unwrap().unwrap();
    assert!(rendered.starts_with("# La/B;\n.method bar()V"));
}

#[test]
fn rendering_ignores_active_search() {
    let mut session = session("Java");
    let class = session.find_class("a.C").unwrap();
    let unfiltered = session.render(class).unwrap();

    session.set_search("foo");
    assert!(!session.tree().is_visible(class));
    assert_eq!(session.render(class).unwrap(), unfiltered);
}

#[test]
fn opening_a_new_source_clears_the_search() {
    let mut session = session("Smali");
    session.set_search("baz");

    session.open(SymbolSource::default());

    assert_eq!(session.search(), "");
    assert!(session.tree().is_empty());
    assert!(session.find_class("a.B").is_err());
}
