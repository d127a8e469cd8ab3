//! Display-width measurement for mixed-width Unicode text
//!
//! Terminal columns are not characters: CJK Fullwidth/Wide code points take
//! two columns, combining marks and other zero-width code points take none.
//! Every padding decision in this crate goes through these helpers instead of
//! `str::len` or `chars().count()`.

use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The ideographic space, rendered at width 1 or 2 depending on the terminal.
pub const FULLWIDTH_SPACE: char = '\u{3000}';

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Number of terminal columns `text` occupies.
///
/// Fullwidth and Wide East Asian Width categories count 2, combining and
/// enclosing marks count 0, everything else (including Ambiguous) counts 1.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Column count of a single character; control characters count 0.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Replace every full-width space (U+3000) with two ASCII spaces.
///
/// Terminals disagree on whether U+3000 is one or two columns wide; two
/// ordinary spaces render identically everywhere. Idempotent: the output
/// contains no U+3000, so a second pass is a no-op.
pub fn normalize_fullwidth_space(text: &str) -> Cow<'_, str> {
    if text.contains(FULLWIDTH_SPACE) {
        Cow::Owned(text.replace(FULLWIDTH_SPACE, "  "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Truncate `text` so its display width does not exceed `max_width`.
///
/// Over-long text is cut at a character boundary and suffixed with `...`
/// (3 columns reserved). When `max_width` itself is 3 or less the result is
/// just a run of dots.
pub fn truncate_to_width(text: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(text) <= max_width {
        return Cow::Borrowed(text);
    }

    if max_width <= ELLIPSIS_WIDTH {
        return Cow::Owned(".".repeat(max_width));
    }

    let budget = max_width - ELLIPSIS_WIDTH;
    let mut result = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        result.push(ch);
        used += w;
    }

    result.push_str(ELLIPSIS);
    Cow::Owned(result)
}

/// Pad `text` with ASCII spaces on the right up to `target` display columns.
///
/// Padding count is `target - display_width(text)`, never a character count.
/// Text already at or past the target is returned unchanged.
pub fn pad_to_width(text: &str, target: usize) -> String {
    let current = display_width(text);
    if current >= target {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(target - current))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width_equals_length() {
        for s in ["", "a", "Name", "hello world", "1234!@#$"] {
            assert_eq!(display_width(s), s.len());
        }
    }

    #[test]
    fn test_wide_width_is_double_char_count() {
        for s in ["東京", "田中太郎", "日本語テスト"] {
            assert_eq!(display_width(s), 2 * s.chars().count());
        }
    }

    #[test]
    fn test_mixed_width() {
        // "Tokyo" (5) + "東京" (4)
        assert_eq!(display_width("Tokyo東京"), 9);
    }

    #[test]
    fn test_combining_mark_is_zero_width() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(display_width("e\u{301}"), 1);
        assert_eq!(char_width('\u{301}'), 0);
    }

    #[test]
    fn test_fullwidth_space_counts_two() {
        assert_eq!(display_width("\u{3000}"), 2);
    }

    #[test]
    fn test_normalize_fullwidth_space() {
        assert_eq!(normalize_fullwidth_space("a\u{3000}b"), "a  b");
        assert!(matches!(
            normalize_fullwidth_space("plain"),
            Cow::Borrowed("plain")
        ));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_fullwidth_space("全角\u{3000}空白").into_owned();
        let twice = normalize_fullwidth_space(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert!(matches!(truncate_to_width("abc", 10), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_truncate_reserves_ellipsis() {
        let t = truncate_to_width("abcdefghij", 8);
        assert_eq!(t, "abcde...");
        assert_eq!(display_width(&t), 8);
    }

    #[test]
    fn test_truncate_wide_never_splits_width() {
        // Budget of 5 fits only one 2-column character before the ellipsis.
        let t = truncate_to_width("日本語テスト", 5);
        assert_eq!(t, "日...");
        assert!(display_width(&t) <= 5);
    }

    #[test]
    fn test_truncate_tiny_budget_is_dots() {
        assert_eq!(truncate_to_width("abcdef", 2), "..");
        assert_eq!(truncate_to_width("abcdef", 3), "...");
    }

    #[test]
    fn test_pad_uses_display_width() {
        // 4 columns of text padded to 8 needs 4 spaces, not 6.
        assert_eq!(pad_to_width("東京", 8), "東京    ");
        assert_eq!(pad_to_width("already long", 4), "already long");
    }
}
