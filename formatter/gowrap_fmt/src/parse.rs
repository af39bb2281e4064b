//! Parser adapter.
//!
//! Go syntax trees come from tree-sitter. Node boundaries are byte offsets
//! into the parsed buffer, which is the only position facility the rest of
//! the engine needs: discovery and extraction are defined purely in terms
//! of those offsets.

use tree_sitter::{Node, Parser, Point, Tree};

use crate::error::FormatError;

/// Parse Go source, rejecting trees that contain error nodes.
///
/// The buffer has normally already passed through the canonical formatter,
/// so a rejection here means the two parsers disagree about validity; the
/// operation still fails with a syntax error rather than wrapping against
/// a broken tree.
pub fn parse_go(source: &str) -> Result<Tree, FormatError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|err| FormatError::Syntax(format!("loading Go grammar: {err}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| FormatError::Syntax("parser produced no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        let point = first_error_point(root).unwrap_or_else(|| root.start_position());
        return Err(FormatError::Syntax(format!(
            "{}:{}: syntax error",
            point.row + 1,
            point.column + 1
        )));
    }

    Ok(tree)
}

/// Position of the first error or missing node, in document order.
fn first_error_point(node: Node) -> Option<Point> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(point) = first_error_point(child) {
            return Some(point);
        }
    }
    Some(node.start_position())
}
