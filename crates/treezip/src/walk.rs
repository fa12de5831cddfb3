/*
 * walk.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Depth-first pre-order walk over a cursor.
 */

use std::fmt;

use crate::cursor::{Cursor, Trail};
use crate::error::{ZipError, ZipResult};

impl<T: Clone> Cursor<T> {
    /// True once a walk has visited every node. A finished cursor's focus
    /// is the root, with any edits made along the way already applied.
    pub fn is_end(&self) -> bool {
        matches!(self.trail, Trail::End)
    }

    /// Move to the next node in depth-first pre-order: the first child if
    /// there is one, otherwise the right sibling, otherwise the right
    /// sibling of the nearest ancestor that has one. When no node remains
    /// the cursor ascends back to the root and finishes; calling `next` on
    /// a finished cursor returns it unchanged.
    pub fn next(&self) -> Self {
        if self.is_end() {
            return self.clone();
        }
        if let Ok(child) = self.down() {
            return child;
        }
        if let Ok(sibling) = self.right() {
            return sibling;
        }
        let mut cursor = self.clone();
        loop {
            match cursor.up() {
                Ok(parent) => match parent.right() {
                    Ok(sibling) => return sibling,
                    Err(_) => cursor = parent,
                },
                Err(_) => return cursor.derive(cursor.focus.clone(), Trail::End),
            }
        }
    }

    /// Move to the previous node in depth-first pre-order: the deepest
    /// rightmost descendant of the left sibling if there is one, otherwise
    /// the parent. At the root this is a no-op, mirroring `next` on a
    /// finished cursor; on a finished cursor it fails.
    pub fn prev(&self) -> ZipResult<Self> {
        match &self.trail {
            Trail::End => Err(ZipError::PreviousOfEnd),
            Trail::Root => Ok(self.clone()),
            Trail::Inner(_) => match self.left() {
                Ok(sibling) => {
                    let mut cursor = sibling;
                    loop {
                        match cursor.down() {
                            Ok(child) => cursor = child.rightmost()?,
                            Err(_) => return Ok(cursor),
                        }
                    }
                }
                Err(_) => self.up(),
            },
        }
    }

    /// A lazy iterator over every node a walk from this cursor visits, in
    /// pre-order, starting with the focus itself. Restart by calling this
    /// again on a fresh root cursor.
    pub fn preorder(&self) -> Preorder<T> {
        Preorder {
            cursor: Some(self.clone()),
        }
    }
}

/// Iterator behind [`Cursor::preorder`].
#[derive(Clone)]
pub struct Preorder<T> {
    cursor: Option<Cursor<T>>,
}

impl<T: Clone> Iterator for Preorder<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let cursor = self.cursor.take()?;
        if cursor.is_end() {
            return None;
        }
        let node = cursor.node().clone();
        self.cursor = Some(cursor.next());
        Some(node)
    }
}

impl<T: fmt::Debug> fmt::Debug for Preorder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preorder")
            .field("cursor", &self.cursor)
            .finish()
    }
}
