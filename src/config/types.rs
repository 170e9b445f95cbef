//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DisplayOptions;
use crate::error::DexViewResult;

use super::loader::{self, ConfigWarning};

/// Renderer selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(default = "default_renderer")]
    pub default: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            default: default_renderer(),
        }
    }
}

fn default_renderer() -> String {
    "Java".to_string()
}

/// Display flags passed to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub annotations: bool,

    #[serde(default = "default_true")]
    pub name: bool,

    #[serde(default = "default_true")]
    pub details: bool,

    #[serde(default = "default_true")]
    pub fields: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            annotations: true,
            name: true,
            details: true,
            fields: true,
        }
    }
}

impl DisplayConfig {
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions::from_switches(self.annotations, self.name, self.details, self.fields)
    }
}

/// Terminal browser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Minimum height of the preview pane
    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            preview_lines: default_preview_lines(),
        }
    }
}

fn default_preview_lines() -> usize {
    20
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub renderer: RendererConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DexViewResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DexViewResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, project config, user config, or defaults
    pub fn load_or_default(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> DexViewResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit, project_root)
    }

    /// Apply environment variable overrides (DEXVIEW_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Display flags as renderer options
    pub fn display_options(&self) -> DisplayOptions {
        self.display.options()
    }
}
