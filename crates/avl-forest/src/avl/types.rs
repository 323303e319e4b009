use crate::types::{ItemNode, Node};

/// Arena node of an [`AvlTree`](super::AvlTree).
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub item: T,
    /// Height of the subtree rooted here; a leaf is `0`, an empty subtree `-1`.
    pub h: i32,
}

impl<T> AvlNode<T> {
    pub fn new(item: T) -> Self {
        Self {
            l: None,
            r: None,
            item,
            h: 0,
        }
    }
}

impl<T> Node for AvlNode<T> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<T> ItemNode<T> for AvlNode<T> {
    fn item(&self) -> &T {
        &self.item
    }

    fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }
}

/// AVL-specific node behavior.
///
/// Height bookkeeping does not look at the item, so this trait is independent
/// of the item type; key-aware code additionally requires [`ItemNode`].
pub trait AvlNodeLike: Node {
    fn h(&self) -> i32;
    fn set_h(&mut self, h: i32);
}

impl<T> AvlNodeLike for AvlNode<T> {
    fn h(&self) -> i32 {
        self.h
    }

    fn set_h(&mut self, h: i32) {
        self.h = h;
    }
}
