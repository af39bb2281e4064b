//! Collapse-vs-wrap decisions and greedy line packing.
//!
//! Each construct is decided independently: if its items can be joined
//! onto the current line within the width budget, the whole span collapses
//! to a single-line rendering; otherwise the items are packed greedily
//! into trailing-comma lines, one indent level deeper than the construct's
//! own line.

use crate::config::WrapConfig;
use crate::discover::Wrappable;
use crate::extract::extract_items;
use crate::splice::Replacement;
use crate::width::visual_width;

/// Decide how `construct` should be rendered against the current buffer
/// state and produce its replacement.
///
/// The replacement covers the construct's full span, opening delimiter to
/// closing delimiter inclusive. Returns `None` for constructs whose
/// delimiters or items no longer line up with the buffer; such constructs
/// are skipped, not errors.
pub fn plan_replacement(
    buffer: &str,
    construct: &Wrappable,
    config: &WrapConfig,
) -> Option<Replacement> {
    let open = char::from(*buffer.as_bytes().get(construct.open)?);
    let close = char::from(*buffer.as_bytes().get(construct.close)?);

    let items = extract_items(buffer, construct)?;

    let line_start = find_line_start(buffer, construct.open);
    let prefix = buffer.get(line_start..construct.open)?;
    let line_indent = leading_whitespace(prefix);

    let single_line = format!("{open}{}{close}", items.texts.join(", "));
    let full_line = format!("{prefix}{single_line}");
    let collapses = !items.any_multiline
        && visual_width(&full_line, config.tab_width) <= config.max_width;

    let text = if collapses {
        single_line
    } else {
        let item_indent = format!("{line_indent}\t");
        let packed = pack_items(&items.texts, &item_indent, config);
        format!("{open}\n{packed}{line_indent}{close}")
    };

    Some(Replacement {
        start: construct.open,
        end: construct.close + 1,
        text,
    })
}

/// Pack items greedily into trailing-comma lines under the width budget.
///
/// The first item always starts a line. Each later item joins the current
/// line only if the line plus `", "`, the item, and the trailing comma
/// still fit; otherwise the line is closed and the item starts a new one.
/// Items are never reordered, dropped, or split: an item wider than the
/// budget gets its own overflowing line. Every produced line, including
/// the last, ends with a comma and a newline.
pub fn pack_items(items: &[String], indent: &str, config: &WrapConfig) -> String {
    let indent_width = visual_width(indent, config.tab_width);

    let mut lines: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_width = indent_width;

    for item in items {
        let item_width = visual_width(item, config.tab_width);

        if current.is_empty() {
            current.push(item);
            current_width = indent_width + item_width;
        } else {
            // +2 for the ", " separator, +1 for the trailing comma
            let joined_width = current_width + 2 + item_width;
            if joined_width + 1 <= config.max_width {
                current.push(item);
                current_width = joined_width;
            } else {
                lines.push(format!("{indent}{},", current.join(", ")));
                current.clear();
                current.push(item);
                current_width = indent_width + item_width;
            }
        }
    }

    if !current.is_empty() {
        lines.push(format!("{indent}{},", current.join(", ")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Offset of the first byte of the line containing `offset`.
fn find_line_start(buffer: &str, offset: usize) -> usize {
    buffer[..offset].rfind('\n').map_or(0, |pos| pos + 1)
}

/// The run of spaces and tabs a line starts with.
fn leading_whitespace(line_prefix: &str) -> &str {
    let end = line_prefix
        .char_indices()
        .find(|&(_, ch)| ch != ' ' && ch != '\t')
        .map_or(line_prefix.len(), |(index, _)| index);
    &line_prefix[..end]
}
