//! Visible-width measurement for strings that may carry ANSI escapes.
//!
//! Column sizing must use the width a cell occupies on screen, so CSI
//! sequences count as zero and wide glyphs count per display column.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::constants::ELLIPSIS;

/// Remove CSI escape sequences (`ESC [ … <letter>`), keeping everything
/// that actually prints.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // parameter bytes run until the final letter
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Display columns `s` occupies in a terminal, escapes excluded.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    if s.as_bytes().contains(&0x1b) {
        strip_ansi(s).as_str().width()
    } else {
        s.width()
    }
}

/// Cut `s` down to exactly `width` display columns, ending with the
/// truncation marker. Escape sequences are dropped from the result.
#[must_use]
pub fn truncate_visible(s: &str, width: usize) -> String {
    let stripped = strip_ansi(s);
    if stripped.as_str().width() <= width {
        return stripped;
    }
    if width <= ELLIPSIS.len() {
        return ELLIPSIS.chars().take(width).collect();
    }

    let budget = width - ELLIPSIS.len();
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in stripped.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    // a double-width glyph straddling the cut leaves one column short
    for _ in used..budget {
        out.push(' ');
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_plain_text_is_untouched() {
        assert_eq!(strip_ansi("plain"), "plain");
        assert_eq!(strip_ansi(""), "");
    }

    #[test]
    fn strip_ansi_removes_color_sequences() {
        assert_eq!(strip_ansi("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(strip_ansi("\x1b[1m\x1b[32mbold green\x1b[0m"), "bold green");
        assert_eq!(strip_ansi("\x1b[38;2;210;135;10mrgb\x1b[0m"), "rgb");
    }

    #[test]
    fn visible_width_ignores_escapes() {
        assert_eq!(visible_width("zsh"), 3);
        assert_eq!(visible_width("\x1b[31mzsh\x1b[0m"), 3);
        assert_eq!(
            visible_width("\x1b[33mcolored\x1b[0m"),
            visible_width("colored")
        );
    }

    #[test]
    fn visible_width_counts_display_columns() {
        // CJK glyphs take two columns each
        assert_eq!(visible_width("日本"), 4);
        assert_eq!(visible_width("a日b"), 4);
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_visible("short", 10), "short");
    }

    #[test]
    fn truncate_ends_with_marker_at_exact_width() {
        let t = truncate_visible("a-very-long-package-name", 10);
        assert_eq!(t, "a-very-...");
        assert_eq!(visible_width(&t), 10);
    }

    #[test]
    fn truncate_pads_when_wide_glyph_straddles_cut() {
        // budget 3 fits one two-column glyph, so one pad column remains
        let t = truncate_visible("日日日", 6);
        assert_eq!(t, "日 ...");
        assert_eq!(visible_width(&t), 6);
    }

    #[test]
    fn truncate_tiny_width_degrades_to_dots() {
        assert_eq!(truncate_visible("abcdef", 2), "..");
        assert_eq!(truncate_visible("abcdef", 3), "...");
    }
}
