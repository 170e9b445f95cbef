//! Terminal rendering functions for the symbol browser.
//!
//! Everything here produces plain strings so the layout can be tested
//! without a terminal. Color is applied last and only when supported.

use crossterm::style::Stylize;

use crate::ui::context::UiContext;
use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::fit;
use crate::ui::theme;

use super::browser::{Mode, Preview, Row, RowKind, SymbolBrowser};

/// Render a single tree row to a string
pub fn render_row(row: &Row, is_active: bool, supports_unicode: bool) -> String {
    let indent = "  ".repeat(row.depth);
    let cursor = if is_active {
        format!("{} ", Icon::Pointer.render(supports_unicode))
    } else {
        "  ".to_string()
    };

    let expand_icon = if !row.expandable {
        Icon::Leaf
    } else if row.expanded {
        Icon::Expand
    } else {
        Icon::Collapse
    };
    let kind_icon = match row.kind {
        RowKind::Package => Icon::Package,
        RowKind::Class => Icon::Class,
        RowKind::Method => Icon::Method,
    };

    format!(
        "{}{}{} {} {}",
        cursor,
        indent,
        expand_icon.render(supports_unicode),
        kind_icon.render(supports_unicode),
        row.label
    )
}

/// Render the status bar: search text, renderer, and visible package count
pub fn render_status_bar(browser: &SymbolBrowser, supports_unicode: bool) -> String {
    let session = browser.session();
    let search = match (browser.mode(), session.search()) {
        (Mode::Search, query) => format!("{} {}_", Icon::Search.render(supports_unicode), query),
        (Mode::Navigate, "") => String::new(),
        (Mode::Navigate, query) => format!("{} {}", Icon::Search.render(supports_unicode), query),
    };

    format!(
        "[{}]  {}/{} packages  {}",
        session.renderer_name(),
        session.tree().child_count(),
        session.tree().packages().len(),
        search
    )
    .trim_end()
    .to_string()
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => {
            "[/] Search    [Tab] Renderer    [→←] Expand/Collapse    [Enter] Toggle    [q] Quit"
        }
        Mode::Search => "Type to filter    [Enter] Keep    [Esc] Clear",
    }
}

/// Lay out the whole screen as exactly `height` lines of `width` columns
pub fn render_screen(
    browser: &mut SymbolBrowser,
    title: &str,
    ui: &UiContext,
    preview_lines: usize,
    width: usize,
    height: usize,
) -> Vec<String> {
    let preview_height = preview_lines.min(height.saturating_sub(7));
    let tree_height = height.saturating_sub(preview_height + 4).max(1);
    let scroll = browser.scroll_for(tree_height);

    let mut lines = Vec::with_capacity(height);
    lines.push(style(&fit(title, width), ui.color, |s| {
        s.with(theme::colors::ACCENT).bold().to_string()
    }));

    let cursor = browser.cursor_position();
    for i in scroll..scroll + tree_height {
        let line = match browser.rows().get(i) {
            Some(row) => {
                let text = fit(&render_row(row, i == cursor, ui.unicode), width);
                if i == cursor {
                    style(&text, ui.color, |s| s.reverse().to_string())
                } else {
                    text
                }
            }
            None if i == 0 && browser.rows().is_empty() => {
                style(&fit("  (no matches)", width), ui.color, |s| {
                    s.with(theme::colors::DIM).to_string()
                })
            }
            None => fit("", width),
        };
        lines.push(line);
    }

    lines.push(style(
        &BorderChar::Horizontal.line(width, ui.unicode),
        ui.color,
        |s| s.with(theme::colors::DIM).to_string(),
    ));

    let preview: Vec<String> = match browser.preview() {
        Preview::Empty => Vec::new(),
        Preview::Text(text) => text.lines().map(|l| fit(l, width)).collect(),
        Preview::Error(message) => vec![style(
            &fit(&format!("{} {}", Icon::Error.render(ui.unicode), message), width),
            ui.color,
            |s| s.with(theme::colors::ERROR).to_string(),
        )],
    };
    for i in 0..preview_height {
        lines.push(preview.get(i).cloned().unwrap_or_else(|| fit("", width)));
    }

    let status = fit(&render_status_bar(browser, ui.unicode), width);
    lines.push(match browser.mode() {
        Mode::Search => style(&status, ui.color, |s| s.with(theme::colors::MATCH).to_string()),
        Mode::Navigate => status,
    });
    lines.push(style(
        &fit(render_help_bar(browser.mode()), width),
        ui.color,
        |s| s.with(theme::colors::DIM).to_string(),
    ));

    lines.truncate(height);
    lines
}

fn style(text: &str, color: bool, paint: impl Fn(&str) -> String) -> String {
    if color {
        paint(text)
    } else {
        text.to_string()
    }
}
