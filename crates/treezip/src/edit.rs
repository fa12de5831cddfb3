/*
 * edit.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Editing operations. Changes are local to the cursor until an ascent
 * rebuilds the ancestors above them.
 */

use std::rc::Rc;

use crate::cursor::{Cursor, Trail};
use crate::error::{ZipError, ZipResult};

impl<T: Clone> Cursor<T> {
    /// Replace the focus with `node`, leaving the ancestor context alone.
    pub fn replace(&self, node: T) -> Self {
        self.derive(node, self.trail.clone())
    }

    /// Replace the focus with `transform(focus)`.
    pub fn edit<F>(&self, transform: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        self.replace(transform(&self.focus))
    }

    /// Insert `node` as the sibling immediately left of the focus,
    /// without moving the focus.
    pub fn insert_left(&self, node: T) -> ZipResult<Self> {
        let crumb = self.crumb().ok_or(ZipError::InsertLeftOfRoot)?;
        let mut left = Vec::with_capacity(crumb.left.len() + 1);
        left.push(node);
        left.extend(crumb.left.iter().cloned());
        let crumb = crumb.with_siblings(left, crumb.right.clone());
        Ok(self.derive(self.focus.clone(), Trail::Inner(Rc::new(crumb))))
    }

    /// Insert `node` as the sibling immediately right of the focus,
    /// without moving the focus.
    pub fn insert_right(&self, node: T) -> ZipResult<Self> {
        let crumb = self.crumb().ok_or(ZipError::InsertRightOfRoot)?;
        let mut right = Vec::with_capacity(crumb.right.len() + 1);
        right.push(node);
        right.extend(crumb.right.iter().cloned());
        let crumb = crumb.with_siblings(crumb.left.clone(), right);
        Ok(self.derive(self.focus.clone(), Trail::Inner(Rc::new(crumb))))
    }

    /// Rebuild the focus with `node` as its new leftmost child.
    pub fn insert_child(&self, node: T) -> ZipResult<Self> {
        if !self.is_branch() {
            return Err(ZipError::InsertChildOfLeaf);
        }
        let mut children = vec![node];
        children.extend(self.shape.children(&self.focus));
        Ok(self.replace(self.shape.build(&self.focus, children)))
    }

    /// Rebuild the focus with `node` as its new rightmost child.
    pub fn append_child(&self, node: T) -> ZipResult<Self> {
        if !self.is_branch() {
            return Err(ZipError::AppendChildOfLeaf);
        }
        let mut children = self.shape.children(&self.focus);
        children.push(node);
        Ok(self.replace(self.shape.build(&self.focus, children)))
    }

    /// Drop the focus from the tree. The left sibling becomes the new
    /// focus when one exists; otherwise the parent is rebuilt from the
    /// remaining children and the cursor lands on it.
    pub fn remove(&self) -> ZipResult<Self> {
        let crumb = self.crumb().ok_or(ZipError::RemoveRoot)?;
        match crumb.left.split_first() {
            Some((sibling, rest)) => {
                let crumb = crumb.with_siblings(rest.to_vec(), crumb.right.clone());
                Ok(self.derive(sibling.clone(), Trail::Inner(Rc::new(crumb))))
            }
            None => {
                let focus = self.shape.build(&crumb.parent_node, crumb.right.clone());
                Ok(self.derive(focus, crumb.parent.clone()))
            }
        }
    }
}
