/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Error types for cursor navigation, traversal, and editing.
 */

use thiserror::Error;

/// Errors produced when a cursor operation is undefined at the current
/// position. One kind per violated precondition, so callers can branch on
/// the exact condition or short-circuit a chain of moves on first failure.
///
/// These are ordinary recoverable values. No operation panics, retries, or
/// logs; every failure is surfaced directly as the operation's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZipError {
    /// `down` on a focus that is not a branch.
    #[error("cannot move down: the focus is a leaf")]
    DownFromLeaf,

    /// `down` on a branch with no children.
    #[error("cannot move down: the focus is a branch with no children")]
    DownFromEmptyBranch,

    /// `up` with no ancestor context.
    #[error("cannot move up from the root")]
    UpFromRoot,

    /// `right` with no ancestor context.
    #[error("cannot move right from the root")]
    RightFromRoot,

    /// `right` with no sibling remaining on that side.
    #[error("cannot move right: already at the rightmost sibling")]
    RightFromRightmost,

    /// `left` with no ancestor context.
    #[error("cannot move left from the root")]
    LeftFromRoot,

    /// `left` with no sibling remaining on that side.
    #[error("cannot move left: already at the leftmost sibling")]
    LeftFromLeftmost,

    /// `rightmost` with no ancestor context.
    #[error("cannot move to the rightmost sibling from the root")]
    RightmostFromRoot,

    /// `leftmost` with no ancestor context.
    #[error("cannot move to the leftmost sibling from the root")]
    LeftmostFromRoot,

    /// `lefts` with no ancestor context.
    #[error("the root has no left siblings")]
    LeftsOfRoot,

    /// `rights` with no ancestor context.
    #[error("the root has no right siblings")]
    RightsOfRoot,

    /// `children` on a focus that is not a branch.
    #[error("cannot list children: the focus is a leaf")]
    ChildrenOfLeaf,

    /// `insert_left` with no ancestor context.
    #[error("cannot insert a sibling to the left of the root")]
    InsertLeftOfRoot,

    /// `insert_right` with no ancestor context.
    #[error("cannot insert a sibling to the right of the root")]
    InsertRightOfRoot,

    /// `insert_child` on a focus that is not a branch.
    #[error("cannot insert a child: the focus is a leaf")]
    InsertChildOfLeaf,

    /// `append_child` on a focus that is not a branch.
    #[error("cannot append a child: the focus is a leaf")]
    AppendChildOfLeaf,

    /// `remove` with no ancestor context.
    #[error("cannot remove the root")]
    RemoveRoot,

    /// `prev` on a cursor whose walk has already finished.
    #[error("cannot step back from a finished walk")]
    PreviousOfEnd,
}

/// Result type for cursor operations.
pub type ZipResult<T> = Result<T, ZipError>;
