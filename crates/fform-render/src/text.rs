#![forbid(unsafe_code)]

//! Cell-width helpers for laying out form lines.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of `s` in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Count grapheme clusters in a string.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Clip `s` to at most `max_width` cells without splitting a grapheme.
///
/// Zero-width graphemes are dropped.
pub fn clip(s: &str, max_width: usize) -> String {
    let mut out = String::with_capacity(s.len().min(max_width.saturating_mul(4)));
    let mut col = 0usize;
    for grapheme in s.graphemes(true) {
        if col >= max_width {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if col + w > max_width {
            break;
        }
        out.push_str(grapheme);
        col += w;
    }
    out
}

/// Pad `s` with spaces on the right to `width` cells.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_to(s: &str, width: usize) -> String {
    let w = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

/// One `glyph` per grapheme of `s`.
pub fn mask(s: &str, glyph: char) -> String {
    std::iter::repeat_n(glyph, grapheme_count(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grapheme_count_ascii() {
        assert_eq!(grapheme_count("hello"), 5);
    }

    #[test]
    fn grapheme_count_unicode() {
        // e + combining acute is one cluster
        assert_eq!(grapheme_count("cafe\u{301}"), 4);
        assert_eq!(grapheme_count("\u{4E2D}\u{6587}"), 2);
    }

    #[test]
    fn clip_ascii() {
        assert_eq!(clip("Subscribe", 4), "Subs");
        assert_eq!(clip("abc", 10), "abc");
        assert_eq!(clip("abc", 0), "");
    }

    #[test]
    fn clip_never_splits_wide_chars() {
        // Each CJK char is 2 cells wide.
        assert_eq!(clip("\u{4E2D}\u{6587}", 3), "\u{4E2D}");
        assert_eq!(display_width(&clip("\u{4E2D}\u{6587}x", 4)), 4);
    }

    #[test]
    fn pad_to_width() {
        assert_eq!(pad_to("Age", 6), "Age   ");
        assert_eq!(pad_to("Password", 4), "Password");
        assert_eq!(display_width(&pad_to("\u{4E2D}", 5)), 5);
    }

    #[test]
    fn mask_per_grapheme() {
        assert_eq!(mask("secret", '*'), "******");
        assert_eq!(mask("cafe\u{301}", '*'), "****");
        assert_eq!(mask("", '*'), "");
    }
}
