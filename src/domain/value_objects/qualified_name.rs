//! QualifiedName value object - splits `a.b.C` into package and display name

use crate::domain::entities::DEFAULT_PACKAGE;
use crate::error::{DexViewError, DexViewResult};

const SEPARATOR: char = '.';

/// A fully-qualified class name split at its last separator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    package: &'a str,
    display: &'a str,
}

impl<'a> QualifiedName<'a> {
    /// Strict split; fails for names without a display suffix.
    ///
    /// ```
    /// use dexview::domain::value_objects::QualifiedName;
    ///
    /// let name = QualifiedName::parse("a.b.C").unwrap();
    /// assert_eq!(name.package(), "a.b");
    /// assert_eq!(name.display_name(), "C");
    ///
    /// assert!(QualifiedName::parse("a.b.").is_err());
    /// ```
    pub fn parse(name: &'a str) -> DexViewResult<Self> {
        let split = Self::split_raw(name);
        if split.display.is_empty() {
            return Err(DexViewError::MalformedSymbolName {
                name: name.to_string(),
            });
        }
        Ok(split)
    }

    /// Lenient split; never fails and never logs.
    ///
    /// Malformed names keep their computed package and use the whole
    /// string as the display name. Callers that want to report malformed
    /// names use [`parse`](Self::parse) first.
    pub fn split(name: &'a str) -> Self {
        let split = Self::split_raw(name);
        if split.display.is_empty() {
            return Self {
                package: split.package,
                display: name,
            };
        }
        split
    }

    fn split_raw(name: &'a str) -> Self {
        match name.rfind(SEPARATOR) {
            Some(pos) => Self {
                package: &name[..pos],
                display: &name[pos + SEPARATOR.len_utf8()..],
            },
            None => Self {
                package: DEFAULT_PACKAGE,
                display: name,
            },
        }
    }

    /// Text before the last separator, or `"default"`
    pub fn package(&self) -> &'a str {
        self.package
    }

    /// Text after the last separator
    pub fn display_name(&self) -> &'a str {
        self.display
    }
}
