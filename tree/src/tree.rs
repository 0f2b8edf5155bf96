//! # Binary Trees
//!
//! A tree is either a [`Tree::Leaf`] holding one value or a [`Tree::Branch`]
//! with exactly two subtrees. Subtrees sit behind `Rc`, so a tree placed
//! inside a larger one is shared rather than copied.
//!
//! The operations here recurse on the structure directly; [`crate::fold`]
//! rebuilds each of them from [`Tree::fold`].
//!
//! ```text
//!        Branch            size     = 5
//!       /      \           depth    = 2
//!   Leaf 1    Branch       maximum  = 3
//!            /      \
//!        Leaf 2   Leaf 3
//! ```

use std::fmt;
use std::rc::Rc;

/// An immutable binary tree with values at the leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree<A> {
    /// A single value.
    Leaf(A),
    /// Two subtrees; neither side can be missing.
    Branch(Rc<Tree<A>>, Rc<Tree<A>>),
}

impl<A> Tree<A> {
    /// Creates a leaf.
    #[must_use]
    pub fn leaf(value: A) -> Self {
        Tree::Leaf(value)
    }

    /// Joins two trees under a new branch.
    ///
    /// # Example
    /// ```
    /// use structural_tree::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::branch(Tree::leaf(2), Tree::leaf(3)));
    /// assert_eq!(tree.size(), 5);
    /// assert_eq!(tree.depth(), 2);
    /// assert_eq!(tree.maximum(), 3);
    /// ```
    #[must_use]
    pub fn branch(left: Tree<A>, right: Tree<A>) -> Self {
        Tree::Branch(Rc::new(left), Rc::new(right))
    }

    /// Returns `true` for a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// Number of nodes, counting leaves and branches alike.
    pub fn size(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Branch(left, right) => 1 + left.size() + right.size(),
        }
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Branch(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest path from the root to a leaf. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Branch(left, right) => 1 + left.depth().max(right.depth()),
        }
    }

    /// Largest leaf value. On ties the right-hand value is returned, as
    /// with [`Ord::max`].
    pub fn maximum(&self) -> A
    where
        A: Ord + Clone,
    {
        match self {
            Tree::Leaf(value) => value.clone(),
            Tree::Branch(left, right) => left.maximum().max(right.maximum()),
        }
    }

    /// Applies `f` to every leaf, keeping the shape. Leaves are visited left
    /// to right.
    pub fn map<B, F>(&self, mut f: F) -> Tree<B>
    where
        F: FnMut(&A) -> B,
    {
        self.map_with(&mut f)
    }

    fn map_with<B, F>(&self, f: &mut F) -> Tree<B>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Tree::Leaf(value) => Tree::Leaf(f(value)),
            Tree::Branch(left, right) => {
                let left = left.map_with(f);
                Tree::branch(left, right.map_with(f))
            }
        }
    }

    /// Leaf values from left to right.
    pub fn fringe(&self) -> Vec<&A> {
        let mut values = Vec::new();
        self.collect_fringe(&mut values);
        values
    }

    fn collect_fringe<'a>(&'a self, values: &mut Vec<&'a A>) {
        match self {
            Tree::Leaf(value) => values.push(value),
            Tree::Branch(left, right) => {
                left.collect_fringe(values);
                right.collect_fringe(values);
            }
        }
    }
}

impl<A: fmt::Display> fmt::Display for Tree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Leaf(value) => write!(f, "{value}"),
            Tree::Branch(left, right) => write!(f, "({left}, {right})"),
        }
    }
}
