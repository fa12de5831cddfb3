/*
 * shape.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The capability contract a tree representation supplies to obtain a
 * cursor over it.
 */

/// How a cursor sees a tree of `T` values.
///
/// The cursor never constructs, compares, or destructures a node itself;
/// every structural question goes through an implementation of this trait.
/// Any representation (nested sequences, records, ASTs, DOM trees) gets a
/// cursor by answering these three questions:
///
/// - [`is_branch`](TreeShape::is_branch): may this node have children?
///   A branch with zero children is still a branch.
/// - [`children`](TreeShape::children): the node's children in
///   left-to-right order. Only invoked when `is_branch` returned true;
///   may legally return an empty vector.
/// - [`build`](TreeShape::build): a replacement node of the same
///   conceptual shape as `original`, holding the supplied children.
///
/// Implementations must not fail for arguments the cursor passes them; a
/// capability set that panics or returns inconsistent answers is a
/// configuration error in the caller, not a cursor error.
///
/// `build` may also be driven by caller code with an `original` that is
/// not itself a branch (for example, turning a leaf into a synthetic
/// branch wrapper). Implementations should define a sensible result for
/// that case; the cursor itself only rebuilds nodes it previously
/// descended through.
///
/// The trait is object-safe: every cursor derived from one root
/// construction shares a single `Rc<dyn TreeShape<T>>`.
pub trait TreeShape<T> {
    /// May `node` have children (true even if it currently has zero)?
    fn is_branch(&self, node: &T) -> bool;

    /// The children of `node`, left to right. Only called when
    /// [`is_branch`](TreeShape::is_branch) is true.
    fn children(&self, node: &T) -> Vec<T>;

    /// A node of the same conceptual shape as `original`, holding
    /// `children` instead of its previous child sequence.
    fn build(&self, original: &T, children: Vec<T>) -> T;
}

/// A [`TreeShape`] assembled from three closures, for callers that do not
/// want to name a capability type.
#[derive(Debug, Clone)]
pub struct FnShape<B, C, M> {
    is_branch: B,
    children: C,
    build: M,
}

impl<B, C, M> FnShape<B, C, M> {
    /// Bundle `is_branch`, `children`, and `build` functions into a shape.
    pub fn new(is_branch: B, children: C, build: M) -> Self {
        FnShape {
            is_branch,
            children,
            build,
        }
    }
}

impl<T, B, C, M> TreeShape<T> for FnShape<B, C, M>
where
    B: Fn(&T) -> bool,
    C: Fn(&T) -> Vec<T>,
    M: Fn(&T, Vec<T>) -> T,
{
    fn is_branch(&self, node: &T) -> bool {
        (self.is_branch)(node)
    }

    fn children(&self, node: &T) -> Vec<T> {
        (self.children)(node)
    }

    fn build(&self, original: &T, children: Vec<T>) -> T {
        (self.build)(original, children)
    }
}
