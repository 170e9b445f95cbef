//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use dexview::{ClassRecord, MethodRecord, SymbolSource};

/// `a.B{foo, bar}`, `a.C{baz}`, `x.Y{foo}`
pub fn sample_source() -> SymbolSource {
    SymbolSource::new(vec![
        ClassRecord::new("a.B").with_methods([MethodRecord::new("foo"), MethodRecord::new("bar")]),
        ClassRecord::new("a.C").with_methods([MethodRecord::new("baz")]),
        ClassRecord::new("x.Y").with_methods([MethodRecord::new("foo")]),
    ])
}

/// Write the sample source as JSON into `dir`
pub fn write_sample(dir: &Path) -> PathBuf {
    let path = dir.join("classes.json");
    let json = serde_json::to_string_pretty(&sample_source()).unwrap();
    fs::write(&path, json).unwrap();
    path
}

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_dexview")
}

/// `dexview` run inside `dir`, isolated from the caller's config and env
pub fn dexview(dir: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("USERPROFILE", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("DEXVIEW_RENDERER")
        .env_remove("DEXVIEW_ASCII")
        .env_remove("RUST_LOG");
    cmd
}
