/*
 * cursor.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Cursor state and navigation over a caller-defined tree shape.
 */

use std::fmt;
use std::rc::Rc;

use crate::error::{ZipError, ZipResult};
use crate::shape::TreeShape;

/// A cursor into a tree of `T` values.
///
/// A cursor pairs the node currently in view (the focus) with exactly
/// enough context to rebuild the whole tree from here: for each level
/// descended through, the siblings to either side of the path and the
/// ancestor node as it was on entry. Moving up rebuilds that ancestor via
/// [`TreeShape::build`] from the possibly-edited child sequence, so edits
/// made at the focus become durable in the tree once the cursor ascends.
///
/// Every operation is a pure function from one cursor value to a new one
/// (or an error); nothing is mutated in place. Cursors derived from a
/// common ancestor share unmodified context through `Rc`, so navigation
/// does not copy the ancestor chain.
#[derive(Clone)]
pub struct Cursor<T> {
    pub(crate) focus: T,
    pub(crate) trail: Trail<T>,
    pub(crate) shape: Rc<dyn TreeShape<T>>,
}

/// Ancestor context of a cursor: nothing above (`Root`), one recorded
/// level per descent (`Inner`), or the terminal marker a finished
/// depth-first walk leaves behind (`End`).
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Trail<T> {
    Root,
    Inner(Rc<Crumb<T>>),
    End,
}

/// One recorded level of descent.
///
/// `left` holds the siblings to the left of the focus nearest-first (the
/// reverse of their tree order), `right` holds the siblings to the right
/// in tree order. `reverse(left) ++ [focus] ++ right` is the parent's full
/// child sequence as of entry to this level. `parent_node` is the parent
/// value as it was at descent time; ascending rebuilds it from the current
/// child sequence rather than reusing it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Crumb<T> {
    pub(crate) left: Vec<T>,
    pub(crate) right: Vec<T>,
    pub(crate) parent_node: T,
    pub(crate) parent: Trail<T>,
}

impl<T: Clone> Crumb<T> {
    /// The same level with different sibling sequences.
    pub(crate) fn with_siblings(&self, left: Vec<T>, right: Vec<T>) -> Self {
        Crumb {
            left,
            right,
            parent_node: self.parent_node.clone(),
            parent: self.parent.clone(),
        }
    }
}

impl<T: Clone> Cursor<T> {
    /// A cursor focused on `root` with no ancestor context.
    pub fn new(root: T, shape: impl TreeShape<T> + 'static) -> Self {
        Cursor::with_shared_shape(root, Rc::new(shape))
    }

    /// Like [`Cursor::new`], for a capability set that is already shared.
    pub fn with_shared_shape(root: T, shape: Rc<dyn TreeShape<T>>) -> Self {
        Cursor {
            focus: root,
            trail: Trail::Root,
            shape,
        }
    }

    /// The node currently in view.
    pub fn node(&self) -> &T {
        &self.focus
    }

    /// Consume the cursor, returning the focus.
    pub fn into_node(self) -> T {
        self.focus
    }

    /// True when the cursor has no ancestor context.
    pub fn is_root(&self) -> bool {
        matches!(self.trail, Trail::Root)
    }

    /// May the focus have children?
    pub fn is_branch(&self) -> bool {
        self.shape.is_branch(&self.focus)
    }

    /// The children of the focus, left to right.
    pub fn children(&self) -> ZipResult<Vec<T>> {
        if !self.is_branch() {
            return Err(ZipError::ChildrenOfLeaf);
        }
        Ok(self.shape.children(&self.focus))
    }

    /// Move to the first child of the focus.
    pub fn down(&self) -> ZipResult<Self> {
        if !self.is_branch() {
            return Err(ZipError::DownFromLeaf);
        }
        let mut children = self.shape.children(&self.focus);
        if children.is_empty() {
            return Err(ZipError::DownFromEmptyBranch);
        }
        let focus = children.remove(0);
        // A finished walk already sits on the (rebuilt) root, so a fresh
        // descent records Root as the parent context; End never appears
        // inside a stored ancestor chain.
        let parent = match &self.trail {
            Trail::End => Trail::Root,
            other => other.clone(),
        };
        let crumb = Crumb {
            left: Vec::new(),
            right: children,
            parent_node: self.focus.clone(),
            parent,
        };
        Ok(self.derive(focus, Trail::Inner(Rc::new(crumb))))
    }

    /// Move to the parent of the focus, rebuilding it from the current
    /// sibling sequence via [`TreeShape::build`].
    pub fn up(&self) -> ZipResult<Self> {
        let crumb = self.crumb().ok_or(ZipError::UpFromRoot)?;
        let mut children = Vec::with_capacity(crumb.left.len() + crumb.right.len() + 1);
        children.extend(crumb.left.iter().rev().cloned());
        children.push(self.focus.clone());
        children.extend(crumb.right.iter().cloned());
        let focus = self.shape.build(&crumb.parent_node, children);
        Ok(self.derive(focus, crumb.parent.clone()))
    }

    /// Move to the sibling immediately right of the focus.
    pub fn right(&self) -> ZipResult<Self> {
        let crumb = self.crumb().ok_or(ZipError::RightFromRoot)?;
        let Some((focus, rest)) = crumb.right.split_first() else {
            return Err(ZipError::RightFromRightmost);
        };
        let mut left = Vec::with_capacity(crumb.left.len() + 1);
        left.push(self.focus.clone());
        left.extend(crumb.left.iter().cloned());
        let crumb = crumb.with_siblings(left, rest.to_vec());
        Ok(self.derive(focus.clone(), Trail::Inner(Rc::new(crumb))))
    }

    /// Move to the sibling immediately left of the focus.
    pub fn left(&self) -> ZipResult<Self> {
        let crumb = self.crumb().ok_or(ZipError::LeftFromRoot)?;
        let Some((focus, rest)) = crumb.left.split_first() else {
            return Err(ZipError::LeftFromLeftmost);
        };
        let mut right = Vec::with_capacity(crumb.right.len() + 1);
        right.push(self.focus.clone());
        right.extend(crumb.right.iter().cloned());
        let crumb = crumb.with_siblings(rest.to_vec(), right);
        Ok(self.derive(focus.clone(), Trail::Inner(Rc::new(crumb))))
    }

    /// Move to the rightmost sibling in one pass. Already being there is
    /// a no-op.
    pub fn rightmost(&self) -> ZipResult<Self> {
        let crumb = self.crumb().ok_or(ZipError::RightmostFromRoot)?;
        let mut between = crumb.right.clone();
        let Some(focus) = between.pop() else {
            return Ok(self.clone());
        };
        let mut left = Vec::with_capacity(crumb.left.len() + between.len() + 1);
        left.extend(between.into_iter().rev());
        left.push(self.focus.clone());
        left.extend(crumb.left.iter().cloned());
        let crumb = crumb.with_siblings(left, Vec::new());
        Ok(self.derive(focus, Trail::Inner(Rc::new(crumb))))
    }

    /// Move to the leftmost sibling in one pass. Already being there is
    /// a no-op.
    pub fn leftmost(&self) -> ZipResult<Self> {
        let crumb = self.crumb().ok_or(ZipError::LeftmostFromRoot)?;
        let mut between = crumb.left.clone();
        let Some(focus) = between.pop() else {
            return Ok(self.clone());
        };
        let mut right = Vec::with_capacity(crumb.right.len() + between.len() + 1);
        right.extend(between.into_iter().rev());
        right.push(self.focus.clone());
        right.extend(crumb.right.iter().cloned());
        let crumb = crumb.with_siblings(Vec::new(), right);
        Ok(self.derive(focus, Trail::Inner(Rc::new(crumb))))
    }

    /// Ascend until no ancestor context remains, rebuilding every level on
    /// the way. A no-op at the root (and on a finished walk, whose focus
    /// already is the root).
    pub fn to_root(&self) -> Self {
        let mut cursor = self.clone();
        while let Ok(parent) = cursor.up() {
            cursor = parent;
        }
        cursor
    }

    /// The siblings left of the focus, in tree order.
    pub fn lefts(&self) -> ZipResult<Vec<T>> {
        let crumb = self.crumb().ok_or(ZipError::LeftsOfRoot)?;
        Ok(crumb.left.iter().rev().cloned().collect())
    }

    /// The siblings right of the focus, in tree order.
    pub fn rights(&self) -> ZipResult<Vec<T>> {
        let crumb = self.crumb().ok_or(ZipError::RightsOfRoot)?;
        Ok(crumb.right.clone())
    }

    /// The ancestors of the focus from the root down to (and including)
    /// the immediate parent, as they were at descent time. Empty at the
    /// root.
    pub fn path(&self) -> Vec<T> {
        let mut ancestors = Vec::new();
        let mut trail = &self.trail;
        while let Trail::Inner(crumb) = trail {
            ancestors.push(crumb.parent_node.clone());
            trail = &crumb.parent;
        }
        ancestors.reverse();
        ancestors
    }

    /// How many levels below the root the focus sits.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut trail = &self.trail;
        while let Trail::Inner(crumb) = trail {
            depth += 1;
            trail = &crumb.parent;
        }
        depth
    }

    pub(crate) fn crumb(&self) -> Option<&Crumb<T>> {
        match &self.trail {
            Trail::Inner(crumb) => Some(crumb),
            Trail::Root | Trail::End => None,
        }
    }

    pub(crate) fn derive(&self, focus: T, trail: Trail<T>) -> Self {
        Cursor {
            focus,
            trail,
            shape: Rc::clone(&self.shape),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("focus", &self.focus)
            .field("trail", &self.trail)
            .finish_non_exhaustive()
    }
}

/// Two cursors are equal when their focus and ancestor context are equal;
/// the shared capability handle does not participate.
impl<T: PartialEq> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.focus == other.focus && self.trail == other.trail
    }
}
