//! Property tests for the symbol tree model and its filters.

use std::collections::BTreeSet;

use proptest::prelude::*;

use dexview::domain::entities::NodeId;
use dexview::{ClassRecord, MethodRecord, SymbolSource, SymbolTree};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-c]{1,3}").unwrap()
}

fn class_record() -> impl Strategy<Value = ClassRecord> {
    (
        proptest::collection::vec(segment(), 0..3),
        proptest::string::string_regex("[A-C][a-c]{0,3}").unwrap(),
        proptest::collection::vec(segment(), 0..4),
    )
        .prop_map(|(package, simple, methods)| {
            let mut parts = package;
            parts.push(simple);
            ClassRecord::new(parts.join("."))
                .with_methods(methods.into_iter().map(MethodRecord::new))
        })
}

fn source() -> impl Strategy<Value = SymbolSource> {
    proptest::collection::vec(class_record(), 0..12).prop_map(SymbolSource::new)
}

/// Every filter slot in the tree, root first, then each package followed
/// by its classes.
fn filter_bits(tree: &SymbolTree) -> Vec<Vec<bool>> {
    let mut bits = vec![tree.filter().as_slice().to_vec()];
    for package in tree.packages() {
        bits.push(package.filter().as_slice().to_vec());
        for class in package.classes() {
            bits.push(class.filter().as_slice().to_vec());
        }
    }
    bits
}

fn query() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-cA-C.]{0,3}").unwrap()
}

fn package_of(name: &str) -> String {
    match name.rfind('.') {
        Some(index) => name[..index].to_string(),
        None => String::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the root has one child per distinct package.
    #[test]
    fn property_child_count_is_distinct_packages(source in source()) {
        let tree = SymbolTree::build(&source);
        let packages: BTreeSet<String> = source
            .classes
            .iter()
            .map(|c| package_of(&c.qualified_name))
            .collect();

        prop_assert_eq!(tree.child_count(), packages.len());
    }

    /// PROPERTY: a visible node always has a visible parent, and a method
    /// match always keeps its class and package visible.
    #[test]
    fn property_matches_propagate_upward(source in source(), q in query()) {
        let mut tree = SymbolTree::build(&source);
        tree.apply_filter(&q);
        let needle = q.to_lowercase();

        for id in tree.visible_ids() {
            if let Some(parent) = id.parent() {
                prop_assert!(tree.is_visible(parent));
            }
        }

        for (p, package) in tree.packages().iter().enumerate() {
            for (c, class) in package.classes().iter().enumerate() {
                for (m, method) in class.methods().iter().enumerate() {
                    if method.display_name().to_lowercase().contains(&needle) {
                        prop_assert!(tree.is_visible(NodeId::Method(p, c, m)));
                    }
                }
            }
        }
    }

    /// PROPERTY: applying the same query twice changes nothing.
    #[test]
    fn property_apply_filter_is_idempotent(source in source(), q in query()) {
        let mut once = SymbolTree::build(&source);
        once.apply_filter(&q);
        let mut twice = once.clone();
        twice.apply_filter(&q);

        prop_assert_eq!(filter_bits(&once), filter_bits(&twice));
    }

    /// PROPERTY: `reset_filter` is the same as filtering on the empty string,
    /// regardless of the previous query.
    #[test]
    fn property_reset_equals_empty_query(source in source(), q in query()) {
        let mut reset = SymbolTree::build(&source);
        reset.apply_filter(&q);
        reset.reset_filter();

        let mut empty = SymbolTree::build(&source);
        empty.apply_filter(&q);
        empty.apply_filter("");

        prop_assert_eq!(filter_bits(&reset), filter_bits(&empty));
    }

    /// PROPERTY: every dense index below `child_count` resolves at every level.
    #[test]
    fn property_dense_children_resolve(source in source(), q in query()) {
        let mut tree = SymbolTree::build(&source);
        tree.apply_filter(&q);

        for i in 0..tree.child_count() {
            let package = tree.child_at(i);
            prop_assert!(package.is_some());
            let Some(package) = package else { continue };
            for j in 0..package.child_count() {
                let class = package.child_at(j);
                prop_assert!(class.is_some());
                let Some(class) = class else { continue };
                for k in 0..class.child_count() {
                    prop_assert!(class.child_at(k).is_some());
                }
                prop_assert!(class.child_at(class.child_count()).is_none());
            }
        }
        prop_assert!(tree.child_at(tree.child_count()).is_none());
    }

    /// PROPERTY: arbitrary names never panic while building or filtering.
    #[test]
    fn property_arbitrary_names_never_panic(
        names in proptest::collection::vec(any::<String>(), 0..8),
        q in any::<String>()
    ) {
        let source = SymbolSource::new(names.into_iter().map(ClassRecord::new).collect());
        let mut tree = SymbolTree::build(&source);
        tree.apply_filter(&q);
        let _ = tree.visible_ids();
        tree.reset_filter();
    }
}
