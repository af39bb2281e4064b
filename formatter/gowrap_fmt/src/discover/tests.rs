//! Tests for wrappable discovery.

use super::*;
use crate::parse::parse_go;

fn wrappables(source: &str) -> Vec<Wrappable> {
    let tree = parse_go(source).expect("test source must parse");
    collect_wrappables(&tree)
}

fn item_texts<'a>(source: &'a str, wrappable: &Wrappable) -> Vec<&'a str> {
    wrappable
        .items
        .iter()
        .map(|span| &source[span.start..span.end])
        .collect()
}

#[test]
fn discovers_call_arguments() {
    let source = "package main\n\nfunc main() {\n\tf(1, 2)\n}\n";
    let found = wrappables(source);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, WrappableKind::CallArgs);
    assert_eq!(item_texts(source, &found[0]), vec!["1", "2"]);
    assert_eq!(&source[found[0].open..=found[0].open], "(");
    assert_eq!(&source[found[0].close..=found[0].close], ")");
}

#[test]
fn empty_call_is_not_a_candidate() {
    let source = "package main\n\nfunc main() {\n\tf()\n}\n";
    assert!(wrappables(source).is_empty());
}

#[test]
fn discovers_composite_literal_elements() {
    let source = "package main\n\nvar nums = []int{1, 2, 3}\n";
    let found = wrappables(source);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, WrappableKind::CompositeElems);
    assert_eq!(item_texts(source, &found[0]), vec!["1", "2", "3"]);
}

#[test]
fn discovers_keyed_struct_literal() {
    let source = "package main\n\nvar p = Point{X: 1, Y: 2}\n";
    let found = wrappables(source);

    assert_eq!(found.len(), 1);
    assert_eq!(item_texts(source, &found[0]), vec!["X: 1", "Y: 2"]);
}

#[test]
fn nested_literal_bodies_are_discovered_independently() {
    let source = "package main\n\nvar grid = [][]int{{1, 2}, {3}}\n";
    let found = wrappables(source);

    assert_eq!(found.len(), 3);
    assert!(found
        .iter()
        .all(|w| w.kind == WrappableKind::CompositeElems));
    assert_eq!(item_texts(source, &found[0]), vec!["{1, 2}", "{3}"]);
    assert_eq!(item_texts(source, &found[1]), vec!["1", "2"]);
    assert_eq!(item_texts(source, &found[2]), vec!["3"]);
}

#[test]
fn discovers_parameter_list_but_not_receiver() {
    let source = "package main\n\ntype T struct{}\n\nfunc (t *T) Scale(factor int) {}\n";
    let found = wrappables(source);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, WrappableKind::ParamList);
    assert_eq!(item_texts(source, &found[0]), vec!["factor int"]);
}

#[test]
fn discovers_two_value_result_list() {
    let source = "package main\n\nfunc split(v int) (int, int) {\n\treturn v, v\n}\n";
    let found = wrappables(source);

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].kind, WrappableKind::ParamList);
    assert_eq!(found[1].kind, WrappableKind::ResultList);
    assert_eq!(item_texts(source, &found[1]), vec!["int", "int"]);
}

#[test]
fn single_parenthesized_result_is_not_a_candidate() {
    let source = "package main\n\nfunc one() (int) {\n\treturn 0\n}\n";
    let found = wrappables(source);

    assert!(found.iter().all(|w| w.kind != WrappableKind::ResultList));
}

#[test]
fn unparenthesized_result_is_not_a_candidate() {
    let source = "package main\n\nfunc one(v int) int {\n\treturn v\n}\n";
    let found = wrappables(source);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, WrappableKind::ParamList);
}

#[test]
fn bare_function_type_is_not_a_candidate() {
    let source = "package main\n\ntype Handler func(a int, b int)\n";
    assert!(wrappables(source).is_empty());
}

#[test]
fn variadic_ellipsis_is_absorbed_into_last_argument() {
    let source = "package main\n\nfunc main() {\n\tcombine(first, rest...)\n}\n";
    let found = wrappables(source);

    assert_eq!(found.len(), 1);
    assert_eq!(item_texts(source, &found[0]), vec!["first", "rest..."]);
}

#[test]
fn comment_inside_construct_disables_it() {
    let source = "package main\n\nfunc main() {\n\tf(a, // why\n\t\tb)\n}\n";
    assert!(wrappables(source).is_empty());
}

#[test]
fn comment_outside_construct_is_harmless() {
    let source = "package main\n\nfunc main() {\n\tf(a, b) // trailing\n}\n";
    assert_eq!(wrappables(source).len(), 1);
}

#[test]
fn single_line_func_literal_argument_is_allowed() {
    let source = "package main\n\nfunc main() {\n\tapply(func(x int) int { return x }, 3)\n}\n";
    let found = wrappables(source);

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].kind, WrappableKind::CallArgs);
    assert_eq!(
        item_texts(source, &found[0]),
        vec!["func(x int) int { return x }", "3"]
    );
    assert_eq!(found[1].kind, WrappableKind::ParamList);
}

#[test]
fn multi_line_func_literal_disables_enclosing_call() {
    let source = "package main\n\nfunc main() {\n\tapply(func(x int) int {\n\t\ty := x * 2\n\t\treturn y\n\t}, 3)\n}\n";
    let found = wrappables(source);

    // The call is off limits; the literal's own parameter list is still fine.
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, WrappableKind::ParamList);
}

#[test]
fn multi_line_raw_string_disables_enclosing_call() {
    let source = "package main\n\nfunc main() {\n\tf(`line one\nline two`, x)\n}\n";
    assert!(wrappables(source).is_empty());
}

#[test]
fn min_items_per_kind() {
    assert_eq!(WrappableKind::CallArgs.min_items(), 1);
    assert_eq!(WrappableKind::CompositeElems.min_items(), 1);
    assert_eq!(WrappableKind::ParamList.min_items(), 1);
    assert_eq!(WrappableKind::ResultList.min_items(), 2);
}

#[test]
fn shift_past_moves_only_offsets_at_or_beyond_edit_end() {
    let mut wrappable = Wrappable {
        kind: WrappableKind::CallArgs,
        open: 5,
        close: 50,
        items: vec![
            ItemSpan { start: 10, end: 20 },
            ItemSpan { start: 30, end: 40 },
        ],
    };

    wrappable.shift_past(25, 5);

    assert_eq!(wrappable.open, 5);
    assert_eq!(wrappable.close, 55);
    assert_eq!(wrappable.items[0], ItemSpan { start: 10, end: 20 });
    assert_eq!(wrappable.items[1], ItemSpan { start: 35, end: 45 });
}

#[test]
fn shift_past_handles_shrinking_edits() {
    let mut wrappable = Wrappable {
        kind: WrappableKind::CompositeElems,
        open: 0,
        close: 100,
        items: vec![ItemSpan { start: 60, end: 80 }],
    };

    wrappable.shift_past(50, -10);

    assert_eq!(wrappable.close, 90);
    assert_eq!(wrappable.items[0], ItemSpan { start: 50, end: 70 });
}
