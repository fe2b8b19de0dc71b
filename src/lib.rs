//! This crate exposes a plain, unbalanced Binary Search Tree (BST) along with
//! tools for inspecting its shape.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! that was inserted with that key, and up to two child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the
//! number of `Node`s on the longest path from the root `Node` to a leaf `Node`).
//! This tree never rebalances itself so the height depends entirely on the order
//! keys arrive in: inserting keys in ascending order produces a chain whose height
//! is the number of keys. [`Tree::height`] and [`Tree::is_balanced`] let you see
//! how good or bad a given shape is.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree. See [`Tree::iter`].

#![deny(missing_docs)]

pub mod tree;

pub use tree::Tree;
