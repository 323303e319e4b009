//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Each child
//! "pointer" is an `Option<u32>` index into that arena, so a node can never
//! be reachable from two parents and rotations are plain index rewrites.

/// Child links (`l`, `r`) of an arena node.
///
/// Left holds lower keys, right holds higher keys.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by the tree.
///
/// Returns a negative number when `a < b`, zero when equal and a positive
/// number when `a > b`.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Item-carrying node interface.
///
/// Rust divergence: nodes own the caller's item rather than a separate
/// key/value pair, the key is derived on demand with the tree's extractor.
pub trait ItemNode<T>: Node {
    fn item(&self) -> &T;
    fn item_mut(&mut self) -> &mut T;
}

/// Comparator over any `PartialOrd` key.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
