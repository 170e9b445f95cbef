//! Terminal capability detection
//!
//! Everything is derived from an environment lookup so detection can be
//! tested without touching the real process environment.

use is_terminal::IsTerminal;

/// Size assumed when the terminal does not report one
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Variables set by common CI runners
const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_HOME"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
    pub height: u16,
}

impl TerminalCapabilities {
    /// Inspect the real terminal; interactive use needs both stdin and stdout
    pub fn detect() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stdin().is_terminal() && std::io::stdout().is_terminal(),
            crossterm::terminal::size().ok(),
        )
    }

    pub(crate) fn from_env(
        var: impl Fn(&str) -> Option<String>,
        is_tty: bool,
        size: Option<(u16, u16)>,
    ) -> Self {
        let dumb = var("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let (width, height) = size.unwrap_or(FALLBACK_SIZE);

        Self {
            is_tty,
            supports_color: is_tty && !dumb && var("NO_COLOR").is_none(),
            supports_unicode: !dumb && locale_allows_unicode(&var),
            is_ci: CI_MARKERS.iter().any(|key| var(key).is_some()),
            width,
            height,
        }
    }
}

/// The first locale variable that is set decides; unset means unicode
fn locale_allows_unicode(var: &impl Fn(&str) -> Option<String>) -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| var(key).filter(|value| !value.is_empty()));

    match locale {
        Some(value) => !(value.eq_ignore_ascii_case("c") || value.eq_ignore_ascii_case("posix")),
        None => true,
    }
}
