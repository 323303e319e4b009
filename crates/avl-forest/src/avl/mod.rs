//! Arena-backed AVL tree and its read-only queries.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod max_sum;
pub mod query;
pub mod types;
pub mod util;

pub use avl_tree::{AvlTree, Iter};
pub use max_sum::MaxSumPath;
pub use types::{AvlNode, AvlNodeLike};
