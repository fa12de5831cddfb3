/*
 * tree.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The nested-sequence tree value type.
 */

use serde::{Deserialize, Serialize};

/// A tree of homogeneous ordered sequences: every node is either a leaf
/// value or a sequence of further trees.
///
/// Serialization is untagged, so the serialized form is the plain nested
/// notation: `seq![1, seq![], 2]` is the JSON `[1,[],2]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeqTree<A> {
    Leaf(A),
    Seq(Vec<SeqTree<A>>),
}

impl<A> SeqTree<A> {
    /// True for sequence nodes, including empty ones.
    pub fn is_seq(&self) -> bool {
        matches!(self, SeqTree::Seq(_))
    }

    /// Total number of nodes in this tree, counting every sequence and
    /// every leaf, including this node itself.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            if let SeqTree::Seq(items) = node {
                pending.extend(items.iter());
            }
        }
        count
    }
}

/// Bare values become leaves, so `seq!` elements can be written without
/// wrapping.
impl<A> From<A> for SeqTree<A> {
    fn from(value: A) -> Self {
        SeqTree::Leaf(value)
    }
}

/// Build a [`SeqTree`] sequence from its elements. Leaf values can be
/// given bare; nested sequences as nested `seq!` calls.
///
/// ```rust
/// use treezip_seq::{seq, SeqTree};
///
/// let tree: SeqTree<i64> = seq![1, seq![2, 3], 4];
/// assert_eq!(tree.node_count(), 6);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::SeqTree::Seq(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::SeqTree::Seq(::std::vec![$($crate::SeqTree::from($item)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seq_macro_builds_the_nested_structure() {
        let tree: SeqTree<i64> = seq![1, seq![], 2];
        assert_eq!(
            tree,
            SeqTree::Seq(vec![
                SeqTree::Leaf(1),
                SeqTree::Seq(vec![]),
                SeqTree::Leaf(2),
            ])
        );
    }

    #[test]
    fn test_leaves_convert_from_bare_values() {
        assert_eq!(SeqTree::from(7), SeqTree::Leaf(7));
    }

    #[test]
    fn test_node_count_includes_every_node() {
        let tree: SeqTree<i64> = seq![1, seq![2, seq![]], 3];
        // the root, three top-level nodes, and two nested ones
        assert_eq!(tree.node_count(), 6);
        assert_eq!(SeqTree::Leaf(1).node_count(), 1);
        assert_eq!(SeqTree::<i64>::Seq(vec![]).node_count(), 1);
    }

    #[test]
    fn test_is_seq() {
        assert!(SeqTree::<i64>::Seq(vec![]).is_seq());
        assert!(!SeqTree::Leaf(1).is_seq());
    }

    #[test]
    fn test_serialization_is_the_nested_notation() {
        let tree: SeqTree<i64> = seq![1, seq![], 2];
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, "[1,[],2]");

        let back: SeqTree<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
