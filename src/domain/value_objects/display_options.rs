//! DisplayOptions value object - which parts of a class a renderer emits

use bitflags::bitflags;

bitflags! {
    /// Independent flags honored by every renderer. Any combination is
    /// legal, including none; methods are always rendered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DisplayOptions: u8 {
        /// Class-level annotations
        const ANNOTATIONS = 0b0001;
        /// The class header (package and declaration)
        const NAME = 0b0010;
        /// Superclass, interfaces, source file and member classes
        const DETAILS = 0b0100;
        /// Field declarations
        const FIELDS = 0b1000;
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::all()
    }
}

impl DisplayOptions {
    /// Build from individual switches (config file and CLI flags)
    pub fn from_switches(annotations: bool, name: bool, details: bool, fields: bool) -> Self {
        let mut options = Self::empty();
        options.set(Self::ANNOTATIONS, annotations);
        options.set(Self::NAME, name);
        options.set(Self::DETAILS, details);
        options.set(Self::FIELDS, fields);
        options
    }
}
