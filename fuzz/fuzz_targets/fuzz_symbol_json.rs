#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

use dexview::{JsonSymbolLoader, SymbolTree};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(source) = JsonSymbolLoader::new().parse(content, Path::new("fuzz.json")) else {
        return;
    };

    // Building, filtering and walking the tree should never panic
    let mut tree = SymbolTree::build(&source);
    let query = source
        .classes
        .first()
        .map(|c| c.qualified_name.as_str())
        .unwrap_or("");
    tree.apply_filter(query);
    for i in 0..tree.child_count() {
        let _ = tree.child_at(i);
    }
    let _ = tree.visible_ids();
    tree.reset_filter();
});
