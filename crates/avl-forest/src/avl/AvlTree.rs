use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::error::AvlError;
use crate::print::{print_tree, PrintChild};
use crate::types::default_comparator;
use crate::util::{find, first, last, size};

use super::types::AvlNode;
use super::util;

/// Self-balancing binary search tree of items ordered by an extracted key.
///
/// Items are stored in an arena of [`AvlNode`]s; the key of each item is
/// derived on demand with `key_of` and ordered with `comparator`. Keys are
/// unique and must not change while an item is stored.
pub struct AvlTree<T, K, F = fn(&T) -> K, C = fn(&K, &K) -> i32>
where
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    pub(crate) arena: Vec<AvlNode<T>>,
    pub(crate) root: Option<u32>,
    pub(crate) key_of: F,
    pub(crate) comparator: C,
    len: usize,
    _k: PhantomData<fn() -> K>,
}

impl<T> AvlTree<T, T, fn(&T) -> T, fn(&T, &T) -> i32>
where
    T: PartialOrd + Clone,
{
    /// Tree whose items are their own keys, in natural order.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>, T::clone)
    }
}

impl<T> Default for AvlTree<T, T, fn(&T) -> T, fn(&T, &T) -> i32>
where
    T: PartialOrd + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, F> AvlTree<T, K, F, fn(&K, &K) -> i32>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    /// Tree keyed by `key_of`, keys in natural order.
    pub fn with_key(key_of: F) -> Self {
        Self::with_comparator(default_comparator::<K>, key_of)
    }
}

impl<T, K, F, C> AvlTree<T, K, F, C>
where
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C, key_of: F) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            key_of,
            comparator,
            len: 0,
            _k: PhantomData,
        }
    }

    /// Key of `item` as seen by this tree.
    pub fn key_of(&self, item: &T) -> K {
        (self.key_of)(item)
    }

    pub(crate) fn compare(&self, a: &K, b: &K) -> i32 {
        (self.comparator)(a, b)
    }

    pub(crate) fn node(&self, idx: u32) -> &AvlNode<T> {
        &self.arena[idx as usize]
    }

    pub(crate) fn key_at(&self, idx: u32) -> K {
        (self.key_of)(&self.node(idx).item)
    }

    /// Stores `item`.
    ///
    /// Fails with [`AvlError::DuplicateKey`] when an item with the same key is
    /// already present; the tree is not modified and `item` is dropped.
    pub fn insert(&mut self, item: T) -> Result<(), AvlError> {
        self.arena.push(AvlNode::new(item));
        let n = (self.arena.len() - 1) as u32;
        match util::insert(
            &mut self.arena,
            self.root,
            n,
            &self.key_of,
            &self.comparator,
        ) {
            Ok(root) => {
                self.root = Some(root);
                self.len += 1;
                Ok(())
            }
            Err(err) => {
                self.arena.pop();
                debug!("insert rejected: {err}");
                Err(err)
            }
        }
    }

    pub fn search(&self, key: &K) -> Option<&T> {
        let key_of = |n: &AvlNode<T>| (self.key_of)(&n.item);
        find(&self.arena, self.root, key, key_of, &self.comparator).map(|i| &self.node(i).item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.contains_key(&self.key_of(item))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Removes the item stored under `key` and returns it.
    pub fn remove_key(&mut self, key: &K) -> Option<T> {
        let (root, removed) =
            util::remove(&mut self.arena, self.root, key, &self.key_of, &self.comparator);
        self.root = root;
        let n = removed?;
        let (root, node) = util::release(&mut self.arena, self.root, n, &self.key_of, &self.comparator);
        self.root = root;
        self.len -= 1;
        Some(node.item)
    }

    /// Removes the stored item whose key equals the key of `item`.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let key = self.key_of(item);
        self.remove_key(&key)
    }

    /// Item with the lowest key.
    pub fn min(&self) -> Option<&T> {
        first(&self.arena, self.root).map(|i| &self.node(i).item)
    }

    /// Item with the highest key.
    pub fn max(&self) -> Option<&T> {
        last(&self.arena, self.root).map(|i| &self.node(i).item)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Height of the tree: `-1` when empty, `0` for a single item.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    /// Calls `visitor` for every item in ascending key order.
    pub fn for_each_in_order<'a, G: FnMut(&'a T)>(&'a self, mut visitor: G) {
        util::in_order(&self.arena, self.root, &mut visitor);
    }

    /// Calls `visitor` for every item in descending key order.
    pub fn for_each_reverse_in_order<'a, G: FnMut(&'a T)>(&'a self, mut visitor: G) {
        util::reverse_in_order(&self.arena, self.root, &mut visitor);
    }

    /// In-order iterator over the stored items.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.root)
    }

    /// Checks ordering, heights, balance and item accounting.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_avl_tree(&self.arena, self.root, &self.key_of, &self.comparator)?;
        if self.len != size(&self.arena, self.root) || self.len != self.arena.len() {
            return Err(format!(
                "Count mismatch: len is {} but {} nodes are stored",
                self.len,
                self.arena.len()
            ));
        }
        Ok(())
    }

    /// Nested dump including arena indices and heights.
    pub fn print_debug(&self) -> String
    where
        T: fmt::Debug,
    {
        util::print::<T, _>(&self.arena, self.root, "")
    }

    fn render(&self, i: u32, tab: &str) -> String
    where
        T: fmt::Display,
    {
        let n = self.node(i);
        if n.l.is_none() && n.r.is_none() {
            return n.item.to_string();
        }
        let (l, r) = (n.l, n.r);
        let left: &PrintChild = &|tab: &str| match l {
            Some(l) => format!("L {}", self.render(l, tab)),
            None => "L ∅".to_string(),
        };
        let right: &PrintChild = &|tab: &str| match r {
            Some(r) => format!("R {}", self.render(r, tab)),
            None => "R ∅".to_string(),
        };
        format!("{}{}", n.item, print_tree(tab, &[Some(left), Some(right)]))
    }
}

/// One line per node, children indented beneath their parent and tagged
/// `L` / `R`.
impl<T, K, F, C> fmt::Display for AvlTree<T, K, F, C>
where
    T: fmt::Display,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => f.write_str("∅"),
            Some(root) => f.write_str(&self.render(root, "")),
        }
    }
}

impl<T, K, F, C> fmt::Debug for AvlTree<T, K, F, C>
where
    T: fmt::Debug,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, K, F, C> IntoIterator for &'a AvlTree<T, K, F, C>
where
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator returned by [`AvlTree::iter`].
pub struct Iter<'a, T> {
    arena: &'a [AvlNode<T>],
    stack: Vec<u32>,
}

impl<'a, T> Iter<'a, T> {
    fn new(arena: &'a [AvlNode<T>], root: Option<u32>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = self.arena[i as usize].l;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let arena = self.arena;
        let node = &arena[i as usize];
        self.push_left_spine(node.r);
        Some(&node.item)
    }
}
