//! Tree command handler
//!
//! Prints the visible tree, optionally filtered, as text or JSON.

use std::path::Path;

use anyhow::Result;

use dexview::presentation::factory;
use dexview::presentation::output::{format_tree, OutputFormat};

/// Execute the tree command
pub fn cmd_tree(
    source: &Path,
    filter: Option<&str>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let mut session = factory::open_session(&config, None, config.display_options(), source)?;
    if let Some(query) = filter {
        session.set_search(query);
    }

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let output = format_tree(session.tree(), format)?;
    if json {
        println!("{}", output);
    } else {
        print!("{}", output);
    }
    Ok(())
}
