//! Visual width measurement.
//!
//! Every width comparison in the engine goes through [`visual_width`] so
//! that tab expansion is applied the same way for line prefixes,
//! single-line candidates, and packed lines.

/// Visual column count of a text span under the given tab stop width.
///
/// A tab advances to the next multiple of `tab_width`; every other
/// character, including multi-byte ones, occupies exactly one column.
///
/// # Example
///
/// ```
/// use gowrap_fmt::width::visual_width;
///
/// assert_eq!(visual_width("\thello", 4), 9);
/// assert_eq!(visual_width("\t\thello", 4), 13);
/// ```
pub fn visual_width(text: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut column = 0;

    for ch in text.chars() {
        if ch == '\t' {
            column = (column / tab_width + 1) * tab_width;
        } else {
            column += 1;
        }
    }

    column
}
