//! Symbol Browser Widget
//!
//! Interactive package/class/method tree with live search and a preview
//! pane showing the selected node in the current renderer.
//!
//! # Module Structure
//!
//! - `browser` - Browser state, row flattening and action handling
//! - `render` - Screen layout rendered to strings
//! - `input` - Keyboard input handling and interactive loop

mod browser;
mod input;
mod render;

pub use browser::SymbolBrowser;
pub use input::run_interactive;
