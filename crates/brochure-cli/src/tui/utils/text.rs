//! Text measurement and wrapping helpers

use unicode_width::UnicodeWidthStr;

/// Wrap a paragraph to the given width, returning owned lines
///
/// Width zero (degenerate layout) yields the text unwrapped rather than
/// panicking or looping.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Truncate a string to a display width, appending an ellipsis
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let target = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("one two three four five six seven", 10);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn test_zero_width_does_not_panic() {
        assert_eq!(wrap_text("hello", 0), vec!["hello".to_string()]);
    }

    #[test]
    fn test_truncate_ellipsis() {
        assert_eq!(truncate_ellipsis("short", 10), "short");
        let cut = truncate_ellipsis("a much longer label", 8);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 8);
    }
}
