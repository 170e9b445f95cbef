use crate::ui::terminal::TerminalCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_ascii: bool, config: &dexview::config::Config) -> Self {
        let caps = TerminalCapabilities::detect();
        Self::from_caps(cli_ascii, config, caps)
    }

    pub(crate) fn from_caps(
        cli_ascii: bool,
        config: &dexview::config::Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && config.ui.unicode && caps.supports_unicode;
        let color = caps.supports_color && !caps.is_ci;

        Self {
            caps,
            color,
            unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexview::config::Config;

    fn tty_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: false,
            width: 120,
            height: 40,
        }
    }

    #[test]
    fn ascii_flag_disables_unicode() {
        let ui = UiContext::from_caps(true, &Config::default(), tty_caps());
        assert!(!ui.unicode);
        assert!(ui.color);
    }

    #[test]
    fn config_can_disable_unicode() {
        let mut config = Config::default();
        config.ui.unicode = false;

        let ui = UiContext::from_caps(false, &config, tty_caps());
        assert!(!ui.unicode);
    }

    #[test]
    fn ci_disables_color() {
        let caps = TerminalCapabilities {
            is_ci: true,
            ..tty_caps()
        };
        let ui = UiContext::from_caps(false, &Config::default(), caps);
        assert!(!ui.color);
        assert!(ui.unicode);
    }
}
