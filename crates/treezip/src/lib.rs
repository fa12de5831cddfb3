/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * treezip: a functional zipper over caller-defined tree shapes.
 *
 * This crate provides a cursor that navigates and edits an arbitrary
 * tree-shaped value while retaining exactly enough context to rebuild the
 * full tree from wherever it stands. The tree's concrete representation
 * stays opaque: the caller supplies the three capability operations of
 * the TreeShape trait and the cursor drives everything through them.
 */

//! A cursor for navigating and editing arbitrary tree-shaped values.
//!
//! # Overview
//!
//! The core pieces are:
//! - [`TreeShape`]: the three-operation capability contract a tree
//!   representation supplies ("is this a branch", "what are its
//!   children", "rebuild it with these children"), with [`FnShape`] as a
//!   closure-bundle adapter
//! - [`Cursor`]: the zipper itself, with navigation (`down`/`up`/`left`/
//!   `right`/extremes), a depth-first walk (`next`/`prev`/[`Preorder`]),
//!   and editing (`replace`/inserts/`remove`)
//! - [`ZipError`]: one error kind per move or edit that is undefined at
//!   the current position
//!
//! Every operation returns a new cursor value; nothing is mutated in
//! place, and unchanged ancestor context is shared between derived
//! cursors.
//!
//! # Example
//!
//! ```rust
//! use treezip::{Cursor, FnShape};
//!
//! // A tree of nested lists of numbers.
//! #[derive(Debug, Clone, PartialEq)]
//! enum Value {
//!     Num(i64),
//!     List(Vec<Value>),
//! }
//!
//! let shape = FnShape::new(
//!     |v: &Value| matches!(v, Value::List(_)),
//!     |v: &Value| match v {
//!         Value::List(items) => items.clone(),
//!         Value::Num(_) => Vec::new(),
//!     },
//!     |_: &Value, children| Value::List(children),
//! );
//!
//! // [1, [2]] -- replace the 1, then rebuild the whole tree.
//! let tree = Value::List(vec![Value::Num(1), Value::List(vec![Value::Num(2)])]);
//! let edited = Cursor::new(tree, shape).down()?.replace(Value::Num(9)).to_root();
//! assert_eq!(
//!     edited.node(),
//!     &Value::List(vec![Value::Num(9), Value::List(vec![Value::Num(2)])]),
//! );
//! # Ok::<(), treezip::ZipError>(())
//! ```

pub mod cursor;
mod edit;
pub mod error;
pub mod shape;
pub mod walk;

#[cfg(test)]
mod fixture;

// Re-export the public surface at the crate root
pub use cursor::Cursor;
pub use error::{ZipError, ZipResult};
pub use shape::{FnShape, TreeShape};
pub use walk::Preorder;
