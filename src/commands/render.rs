//! Render command handler
//!
//! Renders one class, or one method of it, to stdout.

use std::path::Path;

use anyhow::Result;

use dexview::presentation::{factory, DisplayArgs};

/// Execute the render command
pub fn cmd_render(
    source: &Path,
    class: &str,
    method: Option<&str>,
    renderer: Option<&str>,
    display: DisplayArgs,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let options = display.apply(config.display_options());
    let session = factory::open_session(&config, renderer, options, source)?;

    let id = match method {
        Some(name) => session.find_method(class, name)?,
        None => session.find_class(class)?,
    };
    if let Some(text) = session.render(id)? {
        print!("{}", text);
    }
    Ok(())
}
