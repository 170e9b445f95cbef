use crossterm::style::Color;

/// Design tokens for the DexView terminal UI.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #06B6D4
    pub const ACCENT: Color = Color::Cyan;
    /// #F59E0B
    pub const MATCH: Color = Color::Yellow;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
    pub const LEAF: &str = "·";

    // Node kinds.
    pub const PACKAGE: &str = "▣";
    pub const CLASS: &str = "◆";
    pub const METHOD: &str = "ƒ";

    pub const POINTER: &str = "›";
    pub const SEARCH: &str = "⌕";
    pub const ERROR: &str = "✗";
}

pub mod icons_ascii {
    // Tree expansion.
    pub const EXPAND: &str = "[-]";
    pub const COLLAPSE: &str = "[+]";
    pub const LEAF: &str = "   ";

    pub const PACKAGE: &str = "P";
    pub const CLASS: &str = "C";
    pub const METHOD: &str = "m";

    pub const POINTER: &str = ">";
    pub const SEARCH: &str = "/";
    pub const ERROR: &str = "[FAIL]";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
}
