//! DexView - filtered hierarchical symbol index
//!
//! DexView loads the classes of a parsed dex file, arranges them into a
//! package/class/method tree, narrows that tree with an incremental
//! case-insensitive search, and renders the selected symbol through a
//! pluggable renderer (Java-like source or smali directives).
//!
//! ## Layers
//!
//! - `domain` - records, the symbol tree, visibility filters and ports
//! - `infrastructure` - renderers and the JSON symbol loader
//! - `application` - the browse session tying tree, search and renderer together
//! - `presentation` - CLI definitions, session factory and tree output
//! - `config` - TOML configuration with environment overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{render_selection, BrowseSession};
pub use config::Config;
pub use domain::entities::{ClassRecord, FieldRecord, MethodRecord, SymbolSource};
pub use domain::ports::{BoundRenderer, Renderer, SymbolLoader};
pub use domain::services::SymbolTree;
pub use domain::value_objects::{DisplayOptions, VisibilityFilter};
pub use error::{DexViewError, DexViewResult};
pub use infrastructure::{JavaRenderer, JsonSymbolLoader, RendererRegistry, SmaliRenderer};
