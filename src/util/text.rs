use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculates the display width of a string in terminal columns.
///
/// Handles Unicode correctly: CJK characters and emoji are typically two
/// columns wide, combining marks zero.
///
/// # Examples
///
/// ```
/// use flowcare::util::display_width;
///
/// assert_eq!(display_width("Hello"), 5);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Ellipsis string used for truncation
const ELLIPSIS: &str = "...";
/// Display width of the ellipsis (3 columns for ASCII "...")
const ELLIPSIS_WIDTH: usize = 3;

/// Truncates a string to fit within a maximum display width.
///
/// If truncation is necessary, appends "..." to indicate text was cut off.
/// Width-aware so CJK text and emoji never overflow a card column. Single
/// pass, since this runs in the per-frame render path.
///
/// For very narrow widths (0-3 columns) there is no room for "char +
/// ellipsis", so as many characters as fit are returned without one.
///
/// # Examples
///
/// ```
/// use flowcare::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Short", 10), "Short");
/// assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
/// assert_eq!(truncate_to_width("Test", 2), "Te");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    // Width too narrow to fit char + ellipsis: return what fits, no ellipsis.
    if max_width <= ELLIPSIS_WIDTH {
        let mut byte_end = 0;
        let mut current_width = 0;
        for (idx, c) in s.char_indices() {
            let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width > max_width {
                break;
            }
            current_width += char_width;
            byte_end = idx + c.len_utf8();
        }
        if byte_end == s.len() {
            return Cow::Borrowed(s);
        }
        return Cow::Owned(s[..byte_end].to_string());
    }

    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let target_width = max_width.saturating_sub(ELLIPSIS_WIDTH);
    let mut byte_end = 0;
    let mut current_width = 0;
    for (idx, c) in s.char_indices() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        byte_end = idx + c.len_utf8();
    }

    let mut result = String::with_capacity(byte_end + ELLIPSIS.len());
    result.push_str(&s[..byte_end]);
    result.push_str(ELLIPSIS);
    Cow::Owned(result)
}

/// Greedy word-wrap to a maximum display width.
///
/// Words longer than the width are emitted on their own line rather than
/// split mid-word; the caller's widget clips them. Used for accordion
/// answers, which must reflow with the panel.
pub fn wrap_to_width(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in s.split_whitespace() {
        let word_width = display_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
