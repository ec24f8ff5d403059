//! This crate exposes two small immutable value types, mostly for
//! educational purposes: a persistent Binary Search Tree and a quaternion.
//!
//! ## Persistent Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores a value and sometimes
//! has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! The tree here is also *persistent*: `insert` never modifies the tree it
//! is called on. It returns a new tree sharing every node off the insertion
//! path with the original, so older versions stay valid (and cheap to keep)
//! for as long as anyone holds them. Sorted iteration falls out naturally
//! by visiting the left subtree, then the subtree root, then the right
//! subtree.
//!
//! ## Quaternion
//!
//! A quaternion is a four-component number `a + bi + cj + dk` extending the
//! complex numbers with two more imaginary units. Addition is componentwise;
//! multiplication is the Hamilton product, which is famously *not*
//! commutative. The type here is an immutable `Copy` value with a canonical
//! human-readable rendering.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod quaternion;
pub mod tree;
