//! Item extraction and normalization.
//!
//! Items that were previously wrapped across lines must be re-joinable
//! into a single-line candidate before the collapse decision can be made,
//! so every item is sliced from the buffer and its whitespace layout
//! flattened. Token content is never altered.

use crate::discover::Wrappable;

/// Items of one construct, sliced from the current buffer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedItems {
    /// Normalized single-line text, one entry per usable item.
    pub texts: Vec<String>,
    /// Whether any item's raw slice spanned multiple lines before
    /// normalization. Such a construct is never collapsed.
    pub any_multiline: bool,
}

/// Slice and normalize every item of `construct` from `buffer`.
///
/// Item ranges that no longer describe a valid slice are dropped. Returns
/// `None` when nothing usable remains, in which case the construct
/// contributes no replacement.
pub fn extract_items(buffer: &str, construct: &Wrappable) -> Option<ExtractedItems> {
    let mut texts = Vec::with_capacity(construct.items.len());
    let mut any_multiline = false;

    for span in &construct.items {
        let Some(raw) = buffer.get(span.start..span.end) else {
            continue;
        };
        let trimmed = raw.trim();
        if trimmed.contains('\n') {
            any_multiline = true;
        }
        texts.push(normalize_whitespace(trimmed));
    }

    if texts.is_empty() {
        None
    } else {
        Some(ExtractedItems {
            texts,
            any_multiline,
        })
    }
}

/// Collapse every interior whitespace run into a single space.
///
/// Text that is already single-line is returned unchanged.
pub fn normalize_whitespace(text: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if matches!(ch, ' ' | '\t' | '\n' | '\r') {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}
