//! This crate exposes a plain, unbalanced Binary Search Tree (BST) of unique
//! integer keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The [`Tree`] here never rebalances,
//! so its height depends entirely on insertion order: random orders give
//! `O(lg N)` on average while sorted orders give a tree of height `N`. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! [`Tree`] is the primary interface. [`handle`] wraps it for callers that pass
//! trees around as optional handles.
//!
//! A `Tree` is not synchronized. Share one between threads only behind a lock.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod handle;
pub mod tree;
mod util;

#[cfg(test)]
mod test;

pub use error::Error;
pub use tree::Tree;

/// The type of key stored in a [`Tree`].
pub type Key = i32;
