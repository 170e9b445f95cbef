//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating sessions with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - clap argument definitions
//! - `factory` - Creates sessions with proper dependencies (dependency injection)
//! - `output` - Non-interactive tree output
//!
//! ## Usage
//!
//! ```ignore
//! use dexview::presentation::factory;
//!
//! let session = factory::open_session(&config, None, config.display_options(), path)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, DisplayArgs};
pub use factory::{create_session, create_session_with, open_session};
pub use output::{format_tree, outline, OutlineNode, OutputFormat};
