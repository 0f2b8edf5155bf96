//! # Structural Trees
//!
//! An immutable binary tree and the fold that eliminates it.
//!
//! ## Modules
//!
//! - [`tree`]: the [`Tree`] type and its directly recursive operations
//! - [`fold`]: [`Tree::fold`] and the operations rebuilt from it
//!
//! ## Example
//!
//! ```
//! use structural_tree::Tree;
//!
//! let tree = Tree::branch(Tree::leaf(4), Tree::branch(Tree::leaf(9), Tree::leaf(2)));
//! assert_eq!(tree.maximum(), 9);
//! assert_eq!(tree.maximum_via_fold(), tree.maximum());
//! assert_eq!(tree.map(|x| x * 2).to_string(), "(8, (18, 4))");
//! ```

pub mod fold;
pub mod tree;

pub use tree::Tree;
