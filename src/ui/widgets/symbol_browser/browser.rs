//! SymbolBrowser state management and action handling.
//!
//! The browser never builds its own copy of the tree. Rows are produced by
//! walking the session's tree through the adapter contract, so they always
//! reflect the current filter.

use std::collections::HashSet;

use dexview::application::BrowseSession;
use dexview::domain::entities::NodeId;
use dexview::domain::services::tree_adapter::{child_at, child_count, is_expandable};
use dexview::domain::services::{NodeKind, NodeRef, SymbolTree};

/// One visible line of the tree pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: NodeId,
    pub depth: usize,
    pub label: String,
    pub kind: RowKind,
    pub expandable: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Package,
    Class,
    Method,
}

/// Browser action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Move cursor one page up
    PageUp,
    /// Move cursor one page down
    PageDown,
    /// Jump to the first row
    Home,
    /// Jump to the last row
    End,
    /// Expand node
    Expand,
    /// Collapse node, or move to its parent
    Collapse,
    /// Toggle expansion
    Toggle,
    /// Enter search mode
    StartSearch,
    /// Append a character to the search
    SearchInput(char),
    /// Remove the last search character
    SearchBackspace,
    /// Leave search mode, keeping the filter
    SearchSubmit,
    /// Clear the search and show everything
    ClearSearch,
    /// Switch to the next renderer
    CycleRenderer,
    /// Quit
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Navigate,
    Search,
}

/// What the preview pane shows for the selected row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    Empty,
    Text(String),
    Error(String),
}

/// Interactive package/class/method browser
pub struct SymbolBrowser {
    session: BrowseSession,
    expanded: HashSet<NodeId>,
    /// Closed by the user; wins over search auto-expansion
    collapsed: HashSet<NodeId>,
    rows: Vec<Row>,
    cursor: usize,
    scroll: usize,
    page: usize,
    mode: Mode,
    preview: Preview,
}

impl SymbolBrowser {
    /// Create a browser over a loaded session
    pub fn new(session: BrowseSession) -> Self {
        let mut browser = Self {
            session,
            expanded: HashSet::new(),
            collapsed: HashSet::new(),
            rows: Vec::new(),
            cursor: 0,
            scroll: 0,
            page: 10,
            mode: Mode::Navigate,
            preview: Preview::Empty,
        };
        browser.rebuild_rows();
        browser.refresh_preview();
        browser
    }

    pub fn session(&self) -> &BrowseSession {
        &self.session
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.rows.get(self.cursor).map(|row| row.id)
    }

    /// First row shown in a viewport of `height` rows, keeping the cursor
    /// in view
    pub fn scroll_for(&mut self, height: usize) -> usize {
        self.page = height.max(1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.page {
            self.scroll = self.cursor + 1 - self.page;
        }
        self.scroll
    }

    /// Handle a browser action; returns true when the browser should close
    pub fn handle_action(&mut self, action: BrowserAction) -> bool {
        let before = self.selected();
        match action {
            BrowserAction::Up => self.cursor = self.cursor.saturating_sub(1),
            BrowserAction::Down => self.move_to(self.cursor + 1),
            BrowserAction::PageUp => self.cursor = self.cursor.saturating_sub(self.page),
            BrowserAction::PageDown => self.move_to(self.cursor + self.page),
            BrowserAction::Home => self.cursor = 0,
            BrowserAction::End => self.move_to(usize::MAX),
            BrowserAction::Expand => {
                if let Some(row) = self.rows.get(self.cursor) {
                    if row.expandable {
                        let id = row.id;
                        self.open(id);
                    }
                }
            }
            BrowserAction::Collapse => self.collapse(),
            BrowserAction::Toggle => {
                if let Some(row) = self.rows.get(self.cursor) {
                    let id = row.id;
                    if row.expanded {
                        self.close(id);
                    } else if row.expandable {
                        self.open(id);
                    }
                }
            }
            BrowserAction::StartSearch => self.mode = Mode::Search,
            BrowserAction::SearchInput(ch) => {
                let mut query = self.session.search().to_string();
                query.push(ch);
                self.search(&query);
            }
            BrowserAction::SearchBackspace => {
                let mut query = self.session.search().to_string();
                query.pop();
                self.search(&query);
            }
            BrowserAction::SearchSubmit => self.mode = Mode::Navigate,
            BrowserAction::ClearSearch => {
                self.mode = Mode::Navigate;
                self.search("");
            }
            BrowserAction::CycleRenderer => {
                let name = self.session.cycle_renderer().to_string();
                tracing::debug!(renderer = %name, "switched renderer");
                self.refresh_preview();
            }
            BrowserAction::Quit => return true,
        }

        if self.selected() != before {
            self.refresh_preview();
        }
        false
    }

    fn move_to(&mut self, index: usize) {
        self.cursor = index.min(self.rows.len().saturating_sub(1));
    }

    fn open(&mut self, id: NodeId) {
        self.collapsed.remove(&id);
        self.expanded.insert(id);
        self.rebuild_rows();
    }

    fn close(&mut self, id: NodeId) {
        self.expanded.remove(&id);
        self.collapsed.insert(id);
        self.rebuild_rows();
    }

    fn collapse(&mut self) {
        let Some(row) = self.rows.get(self.cursor) else {
            return;
        };
        if row.expanded {
            let id = row.id;
            self.close(id);
        } else if let Some(parent) = row.id.parent() {
            if let Some(index) = self.rows.iter().position(|r| r.id == parent) {
                self.cursor = index;
            }
        }
    }

    fn search(&mut self, query: &str) {
        self.session.set_search(query);
        self.collapsed.clear();
        self.rebuild_rows();
        self.refresh_preview();
    }

    /// Recompute the visible rows, keeping the cursor on the same node when
    /// it is still shown
    pub fn rebuild_rows(&mut self) {
        let selected = self.selected();
        let auto_expand = !self.session.search().is_empty();

        let mut rows = Vec::new();
        flatten(
            self.session.tree(),
            None,
            0,
            &self.expanded,
            &self.collapsed,
            auto_expand,
            &mut rows,
        );
        self.rows = rows;

        if let Some(index) = selected.and_then(|id| self.rows.iter().position(|r| r.id == id)) {
            self.cursor = index;
        } else {
            self.move_to(self.cursor);
        }
    }

    fn refresh_preview(&mut self) {
        self.preview = match self.selected() {
            None => Preview::Empty,
            Some(id) => match self.session.render(id) {
                Ok(Some(text)) => Preview::Text(text),
                Ok(None) => Preview::Empty,
                Err(err) => Preview::Error(err.to_string()),
            },
        };
    }
}

fn flatten(
    tree: &SymbolTree,
    parent: Option<NodeRef<'_>>,
    depth: usize,
    expanded: &HashSet<NodeId>,
    collapsed: &HashSet<NodeId>,
    auto_expand: bool,
    rows: &mut Vec<Row>,
) {
    for i in 0..child_count(tree, parent) {
        let Some(node) = child_at(tree, parent, i) else {
            continue;
        };
        let expandable = is_expandable(Some(node));
        let id = node.id();
        let is_open = expandable
            && !collapsed.contains(&id)
            && (auto_expand || expanded.contains(&id));

        rows.push(Row {
            id: node.id(),
            depth,
            label: node.display_value().to_string(),
            kind: match node.kind() {
                NodeKind::Package(_) => RowKind::Package,
                NodeKind::Class(_) => RowKind::Class,
                NodeKind::Method { .. } => RowKind::Method,
            },
            expandable,
            expanded: is_open,
        });

        if is_open {
            flatten(
                tree,
                Some(node),
                depth + 1,
                expanded,
                collapsed,
                auto_expand,
                rows,
            );
        }
    }
}
