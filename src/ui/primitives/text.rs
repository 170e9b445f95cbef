use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown in place of control characters
const REPLACEMENT: char = '?';

/// Cut `text` to at most `width` display columns.
///
/// Tabs count as four columns and are expanded to spaces. Other control
/// characters (escape sequences included) are replaced, so symbol names
/// and rendered text can never drive the terminal.
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch = if ch != '\t' && ch.is_control() {
            REPLACEMENT
        } else {
            ch
        };
        if ch == '\t' {
            let spaces = 4.min(width - used);
            out.extend(std::iter::repeat(' ').take(spaces));
            used += spaces;
            if used == width {
                break;
            }
            continue;
        }
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

/// Truncate and right-pad `text` to exactly `width` display columns
pub fn fit(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let used = out.width();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}
