//! Unicode-aware text measurement, padding, wrapping and truncation.
//!
//! Widths are display columns as reported by `unicode-width`, so CJK and
//! emoji count as two columns and combining marks as zero.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::Justify;

/// Returns the display width of a string.
///
/// # Example
///
/// ```rust
/// use tabkit::layout::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// Strings already wider than `width` are returned unchanged.
///
/// ```rust
/// use tabkit::layout::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.extend(std::iter::repeat(' ').take(fill));
    out.push_str(s);
    out
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use tabkit::layout::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(fill));
    out
}

/// Pads a string on both sides. When the remaining space is odd, the extra
/// space goes on the right.
///
/// ```rust
/// use tabkit::layout::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let left = fill / 2;
    let mut out = String::with_capacity(s.len() + fill);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(fill - left));
    out
}

/// Pads `s` to `width` according to `justify`.
pub fn justify(s: &str, width: usize, justify: Justify) -> String {
    match justify {
        Justify::Left => pad_right(s, width),
        Justify::Right => pad_left(s, width),
        Justify::Center => pad_center(s, width),
    }
}

/// Word-wraps `s` into lines no wider than `width`.
///
/// Lines are filled greedily and break only at spaces; words longer than
/// `width` are split. Leading spaces are kept when they fit on the first
/// line and dropped otherwise. Always returns at least one (possibly empty)
/// line.
///
/// ```rust
/// use tabkit::layout::wrap;
///
/// assert_eq!(wrap("Pay to the order of", 10), vec!["Pay to the", "order of"]);
/// assert_eq!(wrap("", 10), vec![""]);
/// ```
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let body = s.trim_start_matches(' ');
    let indent = &s[..s.len() - body.len()];

    let options = textwrap::Options::new(width)
        .break_words(true)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .word_splitter(textwrap::WordSplitter::NoHyphenation);
    let mut lines: Vec<String> = textwrap::wrap(body, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    if !indent.is_empty() && display_width(indent) + display_width(&lines[0]) <= width {
        lines[0].insert_str(0, indent);
    }
    lines
}

/// Keeps the leading characters of `s` that fit in `max_width` columns.
///
/// No ellipsis is added: fixed-format values such as dates read better cut
/// than marked.
///
/// ```rust
/// use tabkit::layout::truncate_to_width;
///
/// assert_eq!(truncate_to_width("03/02/1969", 5), "03/02");
/// assert_eq!(truncate_to_width("short", 10), "short");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > max_width {
            break;
        }
        out.push(c);
        current += w;
    }
    out
}
