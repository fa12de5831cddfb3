/*
 * edit_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end edits over a nested-sequence tree.
 */

use pretty_assertions::assert_eq;
use treezip_seq::{cursor, seq, SeqTree};

/// `[1, [], 2, [3, 4, [5, 6], [7]], 8]`
fn sample() -> SeqTree<i64> {
    seq![1, seq![], 2, seq![3, 4, seq![5, 6], seq![7]], 8]
}

fn leaf(n: i64) -> SeqTree<i64> {
    SeqTree::Leaf(n)
}

#[test]
fn test_remove_erases_the_first_element() {
    let removed = cursor(sample()).down().unwrap().remove().unwrap();
    assert_eq!(
        removed.to_root().node(),
        &seq![seq![], 2, seq![3, 4, seq![5, 6], seq![7]], 8]
    );
}

#[test]
fn test_insert_child_into_the_nested_branch() {
    let branch = cursor(sample())
        .down()
        .unwrap()
        .right()
        .unwrap()
        .right()
        .unwrap()
        .right()
        .unwrap();
    assert_eq!(branch.node(), &seq![3, 4, seq![5, 6], seq![7]]);

    let grown = branch.insert_child(11.into()).unwrap();
    assert_eq!(
        grown.to_root().node(),
        &seq![1, seq![], 2, seq![11, 3, 4, seq![5, 6], seq![7]], 8]
    );
}

#[test]
fn test_remove_of_a_branch_drops_the_whole_subtree() {
    let sub = cursor(sample())
        .down()
        .unwrap()
        .right()
        .unwrap()
        .right()
        .unwrap()
        .right()
        .unwrap()
        .down()
        .unwrap()
        .right()
        .unwrap()
        .right()
        .unwrap();
    assert_eq!(sub.node(), &seq![5, 6]);

    let removed = sub.remove().unwrap();
    assert_eq!(removed.node(), &leaf(4));
    assert_eq!(
        removed.to_root().node(),
        &seq![1, seq![], 2, seq![3, 4, seq![7]], 8]
    );
}

#[test]
fn test_sibling_inserts_land_next_to_the_focus() {
    let second = cursor(sample()).down().unwrap().right().unwrap();
    let grown = second
        .insert_left(leaf(10))
        .unwrap()
        .insert_right(leaf(20))
        .unwrap();
    assert_eq!(
        grown.to_root().node(),
        &seq![1, 10, seq![], 20, 2, seq![3, 4, seq![5, 6], seq![7]], 8]
    );
}

#[test]
fn test_append_child_grows_the_right_edge() {
    let grown = cursor(sample()).append_child(leaf(9)).unwrap();
    assert_eq!(
        grown.node(),
        &seq![1, seq![], 2, seq![3, 4, seq![5, 6], seq![7]], 8, 9]
    );
}

#[test]
fn test_edit_applies_a_transform_to_the_focus() {
    let edited = cursor(sample()).down().unwrap().edit(|node| match node {
        SeqTree::Leaf(n) => SeqTree::Leaf(n * 100),
        other => other.clone(),
    });
    assert_eq!(
        edited.to_root().node(),
        &seq![100, seq![], 2, seq![3, 4, seq![5, 6], seq![7]], 8]
    );
}

#[test]
fn test_extremes_at_the_extreme_are_no_ops() {
    let first = cursor(sample()).down().unwrap();
    assert_eq!(first.leftmost().unwrap(), first);

    let last = first.rightmost().unwrap();
    assert_eq!(last.node(), &leaf(8));
    assert_eq!(last.rightmost().unwrap(), last);
}

#[test]
fn test_edited_tree_serializes_to_the_nested_notation() {
    let edited = cursor(sample()).down().unwrap().replace(9.into()).to_root();
    assert_eq!(
        serde_json::to_string(edited.node()).unwrap(),
        "[9,[],2,[3,4,[5,6],[7]],8]"
    );
}
