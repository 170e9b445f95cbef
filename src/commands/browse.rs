//! Browse command handler
//!
//! Opens the interactive symbol browser.

use std::path::Path;

use anyhow::Result;

use dexview::presentation::factory;
use dexview::DexViewError;

use crate::ui::context::UiContext;
use crate::ui::widgets::symbol_browser::{run_interactive, SymbolBrowser};

/// Execute the browse command
pub fn cmd_browse(
    source: &Path,
    renderer: Option<&str>,
    config_path: Option<&Path>,
    ascii: bool,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let ui = UiContext::new(ascii, &config);
    if !ui.caps.is_tty {
        return Err(DexViewError::NotATerminal.into());
    }

    let session = factory::open_session(&config, renderer, config.display_options(), source)?;
    let title = format!(
        "DexView {} {}",
        env!("CARGO_PKG_VERSION"),
        source.display()
    );

    let mut browser = SymbolBrowser::new(session);
    run_interactive(&mut browser, &title, &ui, config.ui.preview_lines)?;
    Ok(())
}
