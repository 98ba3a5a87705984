//! Column-width helpers for report layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns `s` occupies.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncates `s` to at most `max_width` columns, ending in `…` when cut.
///
/// # Example
///
/// ```rust
/// use kitbash::truncate_to_width;
///
/// assert_eq!(truncate_to_width("data-table", 20), "data-table");
/// assert_eq!(truncate_to_width("data-table", 6), "data-…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // one column for the ellipsis
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Truncates or right-pads `s` so it occupies exactly `width` columns.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let pad = width.saturating_sub(cut.width());
    format!("{cut}{}", " ".repeat(pad))
}
