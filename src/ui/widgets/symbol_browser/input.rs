//! Keyboard input handling and interactive loop.
//!
//! This module maps keyboard events to browser actions and runs the
//! interactive terminal loop.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{cursor, execute, terminal};

use crate::ui::context::UiContext;

use super::browser::{BrowserAction, Mode, SymbolBrowser};
use super::render::render_screen;

/// Convert a keyboard event to a BrowserAction for the current mode
pub fn key_to_action(key: KeyEvent, mode: Mode) -> Option<BrowserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(BrowserAction::Quit);
    }

    match mode {
        Mode::Search => match key.code {
            KeyCode::Char(ch) => Some(BrowserAction::SearchInput(ch)),
            KeyCode::Backspace => Some(BrowserAction::SearchBackspace),
            KeyCode::Enter => Some(BrowserAction::SearchSubmit),
            KeyCode::Esc => Some(BrowserAction::ClearSearch),
            KeyCode::Up => Some(BrowserAction::Up),
            KeyCode::Down => Some(BrowserAction::Down),
            KeyCode::Tab => Some(BrowserAction::CycleRenderer),
            _ => None,
        },
        Mode::Navigate => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(BrowserAction::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(BrowserAction::Down),
            KeyCode::PageUp => Some(BrowserAction::PageUp),
            KeyCode::PageDown => Some(BrowserAction::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(BrowserAction::Home),
            KeyCode::End | KeyCode::Char('G') => Some(BrowserAction::End),
            KeyCode::Right | KeyCode::Char('l') => Some(BrowserAction::Expand),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => {
                Some(BrowserAction::Collapse)
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(BrowserAction::Toggle),
            KeyCode::Char('/') => Some(BrowserAction::StartSearch),
            KeyCode::Esc => Some(BrowserAction::ClearSearch),
            KeyCode::Tab => Some(BrowserAction::CycleRenderer),
            KeyCode::Char('q') => Some(BrowserAction::Quit),
            _ => None,
        },
    }
}

/// Run the browser interactively until the user quits
pub fn run_interactive(
    browser: &mut SymbolBrowser,
    title: &str,
    ui: &UiContext,
    preview_lines: usize,
) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut guard = TerminalGuard::new(io::stdout());
    guard.enter_screen()?;

    let result = event_loop(&mut guard.out, browser, title, ui, preview_lines);
    let restored = guard.restore();
    result.and(restored)
}

/// Puts the terminal back the way it was found, on every exit path.
///
/// Created once raw mode is on; dropping it without calling `restore`
/// still leaves the alternate screen and disables raw mode.
struct TerminalGuard<W: Write> {
    out: W,
    alternate: bool,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            alternate: false,
            restored: false,
        }
    }

    fn enter_screen(&mut self) -> io::Result<()> {
        // Set first: a partial write may already have switched screens.
        self.alternate = true;
        execute!(self.out, terminal::EnterAlternateScreen, cursor::Hide)
    }

    fn restore(&mut self) -> io::Result<()> {
        self.restored = true;
        let screen = if self.alternate {
            execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen)
        } else {
            Ok(())
        };
        let raw = terminal::disable_raw_mode();
        screen.and(raw)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if !self.restored {
            let _ = self.restore();
        }
    }
}

fn event_loop(
    stdout: &mut io::Stdout,
    browser: &mut SymbolBrowser,
    title: &str,
    ui: &UiContext,
    preview_lines: usize,
) -> io::Result<()> {
    use crossterm::event::{self, Event, KeyEventKind};

    let mut size = (ui.caps.width, ui.caps.height);
    draw(stdout, browser, title, ui, preview_lines, size)?;

    loop {
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key, browser.mode()) {
                    if browser.handle_action(action) {
                        return Ok(());
                    }
                    draw(stdout, browser, title, ui, preview_lines, size)?;
                }
            }
            Event::Resize(width, height) => {
                size = (width, height);
                draw(stdout, browser, title, ui, preview_lines, size)?;
            }
            _ => {}
        }
    }
}

fn draw(
    stdout: &mut io::Stdout,
    browser: &mut SymbolBrowser,
    title: &str,
    ui: &UiContext,
    preview_lines: usize,
    (width, height): (u16, u16),
) -> io::Result<()> {
    use crossterm::{queue, terminal::ClearType};

    let lines = render_screen(
        browser,
        title,
        ui,
        preview_lines,
        width as usize,
        height as usize,
    );
    for (row, line) in lines.iter().enumerate() {
        queue!(
            stdout,
            cursor::MoveTo(0, row as u16),
            terminal::Clear(ClearType::CurrentLine)
        )?;
        write!(stdout, "{}", line)?;
    }
    stdout.flush()
}
