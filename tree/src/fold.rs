//! # Tree Fold
//!
//! [`Tree::fold`] replaces every `Leaf` with `leaf` and every `Branch` with
//! `branch`. The `*_via_fold` operations are the direct ones from
//! [`crate::tree`] re-expressed through it and agree with them on every tree.
//!
//! ```text
//! fold(Branch(Leaf 1, Leaf 2), leaf, branch) = branch(leaf(1), leaf(2))
//! ```

use crate::tree::Tree;

impl<A> Tree<A> {
    /// Eliminates the tree bottom-up, left subtree before right.
    ///
    /// # Example
    /// ```
    /// use structural_tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::branch(Tree::leaf(2), Tree::leaf(3)));
    /// let sum = tree.fold(|x| *x, |l, r| l + r);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold<B, L, R>(&self, mut leaf: L, mut branch: R) -> B
    where
        L: FnMut(&A) -> B,
        R: FnMut(B, B) -> B,
    {
        self.fold_with(&mut leaf, &mut branch)
    }

    fn fold_with<B, L, R>(&self, leaf: &mut L, branch: &mut R) -> B
    where
        L: FnMut(&A) -> B,
        R: FnMut(B, B) -> B,
    {
        match self {
            Tree::Leaf(value) => leaf(value),
            Tree::Branch(left, right) => {
                let left = left.fold_with(leaf, branch);
                let right = right.fold_with(leaf, branch);
                branch(left, right)
            }
        }
    }

    /// [`size`](Self::size) via `fold`.
    pub fn size_via_fold(&self) -> usize {
        self.fold(|_| 1, |left, right| 1 + left + right)
    }

    /// [`leaf_count`](Self::leaf_count) via `fold`.
    pub fn leaf_count_via_fold(&self) -> usize {
        self.fold(|_| 1, |left, right| left + right)
    }

    /// [`depth`](Self::depth) via `fold`.
    pub fn depth_via_fold(&self) -> usize {
        self.fold(|_| 0, |left: usize, right: usize| 1 + left.max(right))
    }

    /// [`maximum`](Self::maximum) via `fold`, with the same tie-break.
    pub fn maximum_via_fold(&self) -> A
    where
        A: Ord + Clone,
    {
        self.fold(|value| value.clone(), |left: A, right: A| left.max(right))
    }

    /// [`map`](Self::map) via `fold`.
    pub fn map_via_fold<B, F>(&self, mut f: F) -> Tree<B>
    where
        F: FnMut(&A) -> B,
    {
        self.fold(|value| Tree::leaf(f(value)), Tree::branch)
    }
}
