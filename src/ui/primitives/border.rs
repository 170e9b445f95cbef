use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    Horizontal,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, BorderChar::Horizontal) => theme::borders::HORIZONTAL,
            (false, BorderChar::Horizontal) => theme::borders_ascii::HORIZONTAL,
        }
    }

    /// The character repeated to fill `width` columns
    pub fn line(&self, width: usize, supports_unicode: bool) -> String {
        self.render(supports_unicode).repeat(width)
    }
}
