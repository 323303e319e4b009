//! Arena-based AVL tree with path queries.
//!
//! [`AvlTree`] stores caller items ordered by a key that is extracted from
//! each item by an injected function and compared by an injected comparator.
//! Beyond insert / remove / search it answers four read-only queries:
//!
//! - **Level slice** — [`AvlTree::level_items`] visits every item at a depth.
//! - **Path between keys** — [`AvlTree::path_between`] walks from one item up
//!   to the lowest common ancestor and down to the other.
//! - **Direction code** — [`AvlTree::code_for`] spells the descent to an item
//!   as `0` (left) / `1` (right).
//! - **Max-sum path** — [`AvlTree::max_sum_path`] follows the heaviest
//!   root-to-leaf branch of an integer tree.
//!
//! Nodes live in a `Vec` arena and link to each other with `Option<u32>`
//! indices, so rotations are index rewrites and a node is never reachable
//! from two parents.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`ItemNode`] traits, comparator helpers |
//! [`util`] | arena helpers: `first`, `last`, `find`, `size` |
//! [`avl`] | [`AvlTree`], rotations, validator, queries |
//! [`print`] | tree-dump renderer used by `Display` |
//! [`error`] | [`AvlError`] |

pub mod avl;
pub mod error;
pub mod print;
pub mod types;
pub mod util;

pub use avl::{AvlTree, MaxSumPath};
pub use error::AvlError;
pub use types::{default_comparator, ItemNode, Node};
