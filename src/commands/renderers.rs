//! Renderers command handler

use anyhow::Result;

use dexview::presentation::factory;

/// Execute the renderers command
pub fn cmd_renderers(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let session = factory::create_session(&config)?;

    for name in session.registry().names() {
        if name == session.renderer_name() {
            println!("{} (default)", name);
        } else {
            println!("{}", name);
        }
    }
    Ok(())
}
