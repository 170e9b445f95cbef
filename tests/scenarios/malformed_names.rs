//! Malformed class names are reported once, while loading, and never
//! while rendering.

use std::io;
use std::sync::{Arc, Mutex};

use dexview::{BrowseSession, ClassRecord, DisplayOptions, MethodRecord, RendererRegistry};
use dexview::{SymbolSource, SymbolTree};

/// Log sink shared with the subscriber
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a `warn` subscriber and count the lines it logged
fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let logged = captured.0.lock().unwrap().clone();
    let lines = String::from_utf8_lossy(&logged)
        .lines()
        .filter(|line| line.contains("WARN"))
        .count();
    (out, lines)
}

fn malformed_source() -> SymbolSource {
    SymbolSource::new(vec![
        ClassRecord::new("a.b.").with_methods([MethodRecord::new("<init>")]),
        ClassRecord::new("a.Good"),
        ClassRecord::new(""),
    ])
}

#[test]
fn build_warns_once_per_malformed_record() {
    let (tree, warnings) = count_warnings(|| SymbolTree::build(&malformed_source()));

    assert_eq!(warnings, 2);
    assert_eq!(tree.child_count(), 3);
    assert_eq!(tree.child_at(1).unwrap().display_value(), "a.b");
    let class = tree.find_class("a.b.").unwrap();
    assert_eq!(tree.node(class).unwrap().display_value(), "a.b.");
}

#[test]
fn rendering_malformed_class_is_silent() {
    let mut session =
        BrowseSession::new(RendererRegistry::with_defaults(), "Java", DisplayOptions::all())
            .unwrap();
    session.open(malformed_source());

    let (rendered, warnings) = count_warnings(|| {
        let class = session.find_class("a.b.").unwrap();
        let method = session.find_method("a.b.", "<init>").unwrap();
        let java = session.render(class).unwrap().unwrap();
        let java_method = session.render(method).unwrap().unwrap();
        session.cycle_renderer();
        let smali = session.render(class).unwrap().unwrap();
        (java, java_method, smali)
    });

    assert_eq!(warnings, 0);
    assert!(rendered.0.contains("class a.b. {"));
    assert!(rendered.1.contains("a.b.() {"));
    assert!(rendered.2.starts_with(".class La/b/;"));
}
