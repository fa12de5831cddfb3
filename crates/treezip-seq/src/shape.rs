/*
 * shape.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The capability set for nested-sequence trees.
 */

use treezip::{Cursor, TreeShape};

use crate::tree::SeqTree;

/// [`TreeShape`] over [`SeqTree`]: a branch is a sequence, the children
/// are the sequence itself, and rebuilding ignores the original node and
/// wraps the new children verbatim.
///
/// Because `build` never looks at the original, it also covers the case
/// of rebuilding over a leaf original: the result is simply a sequence
/// holding the supplied children.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeqShape;

impl<A: Clone> TreeShape<SeqTree<A>> for SeqShape {
    fn is_branch(&self, node: &SeqTree<A>) -> bool {
        node.is_seq()
    }

    fn children(&self, node: &SeqTree<A>) -> Vec<SeqTree<A>> {
        match node {
            SeqTree::Seq(items) => items.clone(),
            SeqTree::Leaf(_) => Vec::new(),
        }
    }

    fn build(&self, _original: &SeqTree<A>, children: Vec<SeqTree<A>>) -> SeqTree<A> {
        SeqTree::Seq(children)
    }
}

/// A cursor over a nested-sequence tree.
pub fn cursor<A: Clone + 'static>(tree: SeqTree<A>) -> Cursor<SeqTree<A>> {
    Cursor::new(tree, SeqShape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_branches_are_sequences() {
        let tree: SeqTree<i64> = seq![1, 2];
        assert!(SeqShape.is_branch(&tree));
        assert!(SeqShape.is_branch(&SeqTree::<i64>::Seq(vec![])));
        assert!(!SeqShape.is_branch(&SeqTree::Leaf(1)));
    }

    #[test]
    fn test_children_are_the_sequence_itself() {
        let tree: SeqTree<i64> = seq![1, seq![2]];
        assert_eq!(SeqShape.children(&tree), vec![SeqTree::Leaf(1), seq![2]]);
    }

    #[test]
    fn test_build_ignores_the_original() {
        let rebuilt = SeqShape.build(&SeqTree::Leaf(1), vec![SeqTree::Leaf(2)]);
        assert_eq!(rebuilt, seq![2]);
    }

    #[test]
    fn test_cursor_navigates_a_sequence_tree() {
        let first = cursor::<i64>(seq![1, seq![2], 3]).down().unwrap();
        assert_eq!(first.node(), &SeqTree::Leaf(1));
        assert_eq!(first.to_root().node(), &seq![1, seq![2], 3]);
    }
}
