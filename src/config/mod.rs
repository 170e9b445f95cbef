//! Configuration module for DexView
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEXVIEW_*)
//! 3. Explicit `--config` file
//! 4. Project config (./.dexview.toml)
//! 5. User config (<config dir>/dexview/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, parse_with_warnings, user_config_path, with_env_overrides,
    ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DisplayConfig, RendererConfig, UiConfig};
