/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * treezip-seq: nested-sequence trees for treezip cursors.
 *
 * The smallest useful tree representation: every node is either a leaf
 * value or an ordered sequence of further trees. This crate supplies the
 * value type, its capability set, and a literal macro, so a cursor over
 * plain nested data is one call away.
 */

//! Nested-sequence trees for [`treezip`] cursors.
//!
//! # Example
//!
//! ```rust
//! use treezip_seq::{cursor, seq, SeqTree};
//!
//! let tree: SeqTree<i64> = seq![1, seq![2, 3], 4];
//! let edited = cursor(tree)
//!     .down()?
//!     .right()?
//!     .down()?
//!     .replace(9.into())
//!     .to_root();
//! assert_eq!(edited.node(), &seq![1, seq![9, 3], 4]);
//! # Ok::<(), treezip_seq::ZipError>(())
//! ```

pub mod shape;
pub mod tree;

pub use shape::{cursor, SeqShape};
pub use tree::SeqTree;

// Re-export the cursor surface so callers need only this crate
pub use treezip::{Cursor, Preorder, TreeShape, ZipError, ZipResult};
