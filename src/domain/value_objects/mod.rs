//! Domain Value Objects
//!
//! Immutable (or locally mutated) value types used by the tree model and renderers.

mod display_options;
mod indentation;
mod qualified_name;
mod visibility_filter;

pub use display_options::DisplayOptions;
pub use indentation::Indentation;
pub use qualified_name::QualifiedName;
pub use visibility_filter::VisibilityFilter;
