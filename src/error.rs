//! Error types for DexView
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for DexView operations
pub type DexViewResult<T> = Result<T, DexViewError>;

/// Main error type for DexView operations
#[derive(Error, Debug)]
pub enum DexViewError {
    /// Filter slot or dense index beyond the current length.
    ///
    /// Indices are always derived from known collection lengths, so this
    /// signals a bug in index arithmetic rather than bad input.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// No renderer registered under the requested display name
    #[error("unknown renderer '{name}'")]
    UnknownRenderer { name: String },

    /// Qualified name that cannot yield a display suffix
    #[error("malformed symbol name '{name}'")]
    MalformedSymbolName { name: String },

    /// Class or method lookup by name failed
    #[error("symbol not found: {name}")]
    SymbolNotFound { name: String },

    /// Symbol source could not be loaded
    #[error("invalid symbol source {path}: {message}")]
    InvalidSource { path: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Interactive mode needs a terminal on stdin/stdout
    #[error("interactive browsing requires a terminal")]
    NotATerminal,

    /// Output sink rejected a write during rendering
    #[error("render failed: {0}")]
    Render(#[from] std::fmt::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
