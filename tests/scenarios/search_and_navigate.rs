//! Loading a source, filtering it, and walking the visible tree.

use dexview::domain::services::tree_adapter::{self, NodeKind};
use dexview::SymbolTree;

use crate::common::sample_source;

#[test]
fn load_groups_classes_by_package() {
    let tree = SymbolTree::build(&sample_source());

    assert_eq!(tree.child_count(), 2);
    let a = tree.child_at(0).unwrap();
    assert_eq!(a.display_value(), "a");
    assert_eq!(a.child_count(), 2);
    assert_eq!(tree.child_at(1).unwrap().display_value(), "x");
}

#[test]
fn method_search_reveals_ancestors_only() {
    let mut tree = SymbolTree::build(&sample_source());
    tree.apply_filter("foo");

    assert_eq!(tree.child_count(), 2);

    let a = tree.child_at(0).unwrap();
    assert_eq!(a.display_value(), "a");
    assert_eq!(a.child_count(), 1);
    let b = a.child_at(0).unwrap();
    assert_eq!(b.display_value(), "B");
    assert_eq!(b.child_count(), 1);
    assert_eq!(b.child_at(0).unwrap().display_value(), "foo");

    let package_a = &tree.packages()[0];
    let c = &package_a.classes()[1];
    assert_eq!(c.qualified_name(), "a.C");
    assert_eq!(c.filter().true_count(), 0);
    let c_ref = tree
        .node(dexview::domain::entities::NodeId::Class(0, 1))
        .unwrap();
    assert!(!c_ref.is_expandable());

    let x = tree.child_at(1).unwrap();
    assert_eq!(x.display_value(), "x");
    assert_eq!(tree.packages()[1].filter().true_count(), 1);
}

#[test]
fn no_match_hides_everything() {
    let mut tree = SymbolTree::build(&sample_source());
    tree.apply_filter("nomatch");

    assert_eq!(tree.filter().true_count(), 0);
    assert_eq!(tree_adapter::child_count(&tree, None), 0);
    assert!(tree_adapter::child_at(&tree, None, 0).is_none());
}

#[test]
fn clearing_search_restores_full_tree() {
    let mut tree = SymbolTree::build(&sample_source());
    let before = tree.visible_ids();

    tree.apply_filter("baz");
    assert_eq!(tree.child_count(), 1);
    tree.reset_filter();

    assert_eq!(tree.visible_ids(), before);
}

#[test]
fn adapter_reports_kinds_and_expandability() {
    let tree = SymbolTree::build(&sample_source());
    let package = tree_adapter::child_at(&tree, None, 0).unwrap();
    let class = tree_adapter::child_at(&tree, Some(package), 0).unwrap();
    let method = tree_adapter::child_at(&tree, Some(class), 1).unwrap();

    assert!(matches!(package.kind(), NodeKind::Package(_)));
    assert!(matches!(class.kind(), NodeKind::Class(_)));
    assert!(matches!(method.kind(), NodeKind::Method { .. }));
    assert_eq!(tree_adapter::display_value(Some(method)), Some("bar"));
    assert_eq!(tree_adapter::display_value(None), None);
    assert!(tree_adapter::is_expandable(Some(class)));
    assert!(!tree_adapter::is_expandable(Some(method)));
    assert!(!tree_adapter::is_expandable(None));
}

#[test]
fn reload_replaces_previous_tree() {
    let mut tree = SymbolTree::build(&sample_source());
    tree.apply_filter("foo");

    tree.load(&dexview::SymbolSource::new(vec![dexview::ClassRecord::new(
        "z.Only",
    )]));

    assert_eq!(tree.child_count(), 1);
    assert_eq!(tree.child_at(0).unwrap().display_value(), "z");
}
