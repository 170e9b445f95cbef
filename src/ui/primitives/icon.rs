use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Expand,
    Collapse,
    Leaf,
    Package,
    Class,
    Method,
    Pointer,
    Search,
    Error,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Expand) => theme::icons::EXPAND,
            (true, Icon::Collapse) => theme::icons::COLLAPSE,
            (true, Icon::Leaf) => theme::icons::LEAF,
            (true, Icon::Package) => theme::icons::PACKAGE,
            (true, Icon::Class) => theme::icons::CLASS,
            (true, Icon::Method) => theme::icons::METHOD,
            (true, Icon::Pointer) => theme::icons::POINTER,
            (true, Icon::Search) => theme::icons::SEARCH,
            (true, Icon::Error) => theme::icons::ERROR,
            (false, Icon::Expand) => theme::icons_ascii::EXPAND,
            (false, Icon::Collapse) => theme::icons_ascii::COLLAPSE,
            (false, Icon::Leaf) => theme::icons_ascii::LEAF,
            (false, Icon::Package) => theme::icons_ascii::PACKAGE,
            (false, Icon::Class) => theme::icons_ascii::CLASS,
            (false, Icon::Method) => theme::icons_ascii::METHOD,
            (false, Icon::Pointer) => theme::icons_ascii::POINTER,
            (false, Icon::Search) => theme::icons_ascii::SEARCH,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
        }
    }
}
