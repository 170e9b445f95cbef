//! Session Factory
//!
//! Creates sessions with infrastructure dependencies wired up.

use std::path::Path;

use crate::application::BrowseSession;
use crate::config::Config;
use crate::domain::value_objects::DisplayOptions;
use crate::error::DexViewResult;
use crate::infrastructure::{JsonSymbolLoader, RendererRegistry};

/// Create a session from configuration, without a source loaded
pub fn create_session(config: &Config) -> DexViewResult<BrowseSession> {
    create_session_with(config, None, config.display_options())
}

/// Create a session, overriding the configured renderer and display flags
pub fn create_session_with(
    config: &Config,
    renderer: Option<&str>,
    options: DisplayOptions,
) -> DexViewResult<BrowseSession> {
    BrowseSession::new(
        RendererRegistry::with_defaults(),
        renderer.unwrap_or(&config.renderer.default),
        options,
    )
}

/// Create a session and load `source` into it
pub fn open_session(
    config: &Config,
    renderer: Option<&str>,
    options: DisplayOptions,
    source: &Path,
) -> DexViewResult<BrowseSession> {
    let mut session = create_session_with(config, renderer, options)?;
    session.open_path(&JsonSymbolLoader::new(), source)?;
    Ok(session)
}
