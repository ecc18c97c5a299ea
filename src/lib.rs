//! This crate exposes a plain, unbalanced Binary Search Tree (BST) mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element
//! and will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for elements in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). The
//! [`Tree`] here never rebalances itself so inserting sorted input degrades it
//! into a list. It does expose single [rotations][Tree::rotate_right] so a
//! caller can rebalance by hand, along with a handful of structural queries
//! (fullness, shape comparison, mirroring) and a sorted, in-order
//! [iterator][Tree::iter].
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//! assert_eq!(tree.find_min(), Err(Error::Underflow));
//!
//! for x in [5, 3, 8, 1, 4] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.find_min(), Ok(&1));
//! assert_eq!(tree.find_max(), Ok(&8));
//! assert_eq!(tree.levels(), vec![vec![&5], vec![&3, &8], vec![&1, &4]]);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod compare;
mod error;
mod iter;
mod levels;
mod transform;
mod tree;


pub use error::{Error, Result};
pub use iter::Iter;
pub use transform::Rotation;
pub use tree::Tree;
