//! Command handlers
//!
//! Each handler loads configuration, builds a session through the
//! presentation factory, and writes its result to stdout.

pub mod browse;
pub mod render;
pub mod renderers;
pub mod tree;

use std::path::Path;

use anyhow::Result;

use dexview::config::Config;

/// Load configuration and report unknown keys as warnings
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().ok();
    let (config, warnings) = Config::load_or_default(explicit, cwd.as_deref())?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    Ok(config)
}
