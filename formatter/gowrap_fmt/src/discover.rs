//! Wrappable discovery.
//!
//! Walks a parsed syntax tree and extracts every bracketed, comma-separated
//! list that is a candidate for re-wrapping. Discovery produces value-typed
//! descriptors holding byte offsets only — no references back into the tree
//! — so all buffer mutation can happen in a later, ownership-clear pass.

use tree_sitter::{Node, Tree};

/// The kind of bracketed list being rewritten.
///
/// A closed enumeration with a uniform descriptor shape keeps the decision
/// engine and packer kind-agnostic: once discovered, every construct is
/// just delimiters plus item ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrappableKind {
    /// Call arguments: `foo(a, b)`, including builtin calls like `make`.
    CallArgs,

    /// Composite literal elements: `[]int{1, 2}`, `Point{X: 1}`, and
    /// nested brace bodies with an elided type.
    CompositeElems,

    /// Function, method, or closure parameters: `func f(a, b int)`.
    ParamList,

    /// Parenthesized result list: `func f() (int, error)`.
    ///
    /// A single unparenthesized result carries no delimiters to wrap and
    /// is never a candidate.
    ResultList,
}

impl WrappableKind {
    /// Minimum item count for a list of this kind to be a candidate.
    #[inline]
    pub fn min_items(self) -> usize {
        match self {
            WrappableKind::ResultList => 2,
            _ => 1,
        }
    }

    /// Get a human-readable name for this construct kind.
    pub fn name(self) -> &'static str {
        match self {
            WrappableKind::CallArgs => "call arguments",
            WrappableKind::CompositeElems => "composite literal elements",
            WrappableKind::ParamList => "parameter list",
            WrappableKind::ResultList => "result list",
        }
    }
}

/// Byte range of one item inside a construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpan {
    /// Start of the item's own syntactic extent.
    pub start: usize,
    /// End of the item, excluding trailing separators and comments.
    pub end: usize,
}

/// One discovered construct: delimiter offsets plus ordered item ranges.
///
/// All offsets are byte offsets into the buffer the tree was parsed from.
/// Item ranges are strictly ordered, non-overlapping, and contained within
/// `(open, close)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrappable {
    /// What kind of list this is.
    pub kind: WrappableKind,
    /// Offset of the opening delimiter.
    pub open: usize,
    /// Offset of the closing delimiter.
    pub close: usize,
    /// Ordered item ranges between the delimiters.
    pub items: Vec<ItemSpan>,
}

impl Wrappable {
    /// Shift every recorded offset at or beyond `edit_end` by `delta`.
    ///
    /// Called after a nested construct's replacement has been applied to
    /// the shared buffer. An enclosing construct's own opening delimiter
    /// lies before the edit and never moves; its closing delimiter and any
    /// item ranges past the edit do.
    pub fn shift_past(&mut self, edit_end: usize, delta: isize) {
        self.close = shift(self.close, edit_end, delta);
        for span in &mut self.items {
            span.start = shift(span.start, edit_end, delta);
            span.end = shift(span.end, edit_end, delta);
        }
    }
}

fn shift(offset: usize, edit_end: usize, delta: isize) -> usize {
    if offset >= edit_end {
        offset.saturating_add_signed(delta)
    } else {
        offset
    }
}

/// Collect every wrappable construct in the tree, in document order.
///
/// Nested constructs are discovered independently; no filtering by nesting
/// depth happens here.
pub fn collect_wrappables(tree: &Tree) -> Vec<Wrappable> {
    let mut found = Vec::new();
    visit(tree.root_node(), &mut found);
    found
}

fn visit(node: Node, out: &mut Vec<Wrappable>) {
    if let Some(wrappable) = wrappable_for(node) {
        out.push(wrappable);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, out);
    }
}

/// Build a descriptor for `node` if it is a candidate list.
fn wrappable_for(node: Node) -> Option<Wrappable> {
    let kind = match node.kind() {
        "argument_list" | "special_argument_list" => WrappableKind::CallArgs,
        "literal_value" => WrappableKind::CompositeElems,
        "parameter_list" => parameter_list_kind(node)?,
        _ => return None,
    };

    if !is_wrap_safe(node) {
        return None;
    }

    let open = node.start_byte();
    let close = node.end_byte().checked_sub(1)?;
    if close <= open {
        return None;
    }

    let mut items = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        let mut end = child.end_byte();
        // A trailing `...` sits outside the final argument's node; absorb
        // it into the item so variadic forwarding survives the rewrite.
        if kind == WrappableKind::CallArgs {
            if let Some(sibling) = child.next_sibling() {
                if sibling.kind() == "..." {
                    end = sibling.end_byte();
                }
            }
        }
        items.push(ItemSpan {
            start: child.start_byte(),
            end,
        });
    }

    if items.len() < kind.min_items() {
        return None;
    }

    Some(Wrappable {
        kind,
        open,
        close,
        items,
    })
}

/// Classify a `parameter_list` node, or rule it out.
///
/// Only the parameter and result positions of function declarations,
/// method declarations, and function literals are candidates. Method
/// receivers and bare function types (as they appear in type declarations
/// or struct fields) are left alone.
fn parameter_list_kind(node: Node) -> Option<WrappableKind> {
    let parent = node.parent()?;
    match parent.kind() {
        "function_declaration" | "method_declaration" | "func_literal" => {
            if field_is(parent, "parameters", node) {
                Some(WrappableKind::ParamList)
            } else if field_is(parent, "result", node) {
                Some(WrappableKind::ResultList)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn field_is(parent: Node, field: &str, node: Node) -> bool {
    parent
        .child_by_field_name(field)
        .is_some_and(|child| child.id() == node.id())
}

/// Whether the construct's subtree can be re-joined onto one line without
/// changing meaning.
///
/// Rejects constructs containing a comment (a `//` comment would swallow
/// the rest of a joined line), a raw string literal spanning multiple
/// lines (joining would edit the string's contents), or a function literal
/// spanning multiple lines (Go statement separation depends on newlines).
/// Skipped constructs keep their current formatting; constructs nested
/// inside them are still considered on their own.
fn is_wrap_safe(node: Node) -> bool {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "comment" => return false,
            "raw_string_literal" | "func_literal" if spans_lines(child) => return false,
            _ => {}
        }
        if !is_wrap_safe(child) {
            return false;
        }
    }
    true
}

fn spans_lines(node: Node) -> bool {
    node.start_position().row != node.end_position().row
}

#[cfg(test)]
mod tests;
