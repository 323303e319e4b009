//! Read-only shape queries over [`AvlTree`]: level slices, paths between
//! keys and root-to-key codes. None of these rebalance.

use log::debug;

use crate::error::AvlError;
use crate::types::Node;

use super::util;
use super::AvlTree;

impl<T, K, F, C> AvlTree<T, K, F, C>
where
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    /// Visits, left to right, every item whose depth equals `level` (root is
    /// depth 0).
    ///
    /// Fails with [`AvlError::LevelNotFound`] and visits nothing when the tree
    /// is empty or `level` is negative or deeper than [`AvlTree::height`].
    pub fn level_items<'a, G: FnMut(&'a T)>(
        &'a self,
        level: i32,
        mut visitor: G,
    ) -> Result<(), AvlError> {
        if self.root.is_none() || level < 0 || level > self.height() {
            debug!("level {level} not present (height {})", self.height());
            return Err(AvlError::LevelNotFound { level });
        }
        util::visit_level(&self.arena, self.root, level, &mut visitor);
        Ok(())
    }

    /// Items at depth `level`, left to right.
    pub fn level(&self, level: i32) -> Result<Vec<&T>, AvlError> {
        let mut out = Vec::new();
        self.level_items(level, |item| out.push(item))?;
        Ok(out)
    }

    /// Arena indices visited while descending to `key`, root first.
    fn path_indices(&self, key: &K) -> Option<Vec<u32>> {
        let mut path = Vec::new();
        let mut curr = self.root;
        while let Some(i) = curr {
            path.push(i);
            let cmp = self.compare(key, &self.key_at(i));
            if cmp == 0 {
                return Some(path);
            }
            let node = self.node(i);
            curr = if cmp < 0 { node.l() } else { node.r() };
        }
        None
    }

    /// Items on the descent from the root to `key`, root first and the item
    /// under `key` last. Empty when `key` is absent.
    pub fn path_to_key(&self, key: &K) -> Vec<&T> {
        self.path_indices(key)
            .unwrap_or_default()
            .into_iter()
            .map(|i| &self.node(i).item)
            .collect()
    }

    /// The unique tree path from the item under `a` to the item under `b`.
    ///
    /// The walk climbs from `a` to the lowest common ancestor and then
    /// descends to `b`; consecutive items are always parent and child. Empty
    /// when either key is absent, a single item when both keys are equal.
    pub fn path_between_keys(&self, a: &K, b: &K) -> Vec<&T> {
        let (Some(path_a), Some(path_b)) = (self.path_indices(a), self.path_indices(b)) else {
            return Vec::new();
        };

        if self.compare(a, b) == 0 {
            return path_a
                .last()
                .map(|&i| vec![&self.node(i).item])
                .unwrap_or_default();
        }

        // Both paths start at the root, so they share at least one node.
        let common = path_a
            .iter()
            .zip(&path_b)
            .take_while(|(x, y)| self.compare(&self.key_at(**x), &self.key_at(**y)) == 0)
            .count();
        let lca = common - 1;

        let mut out = Vec::with_capacity(path_a.len() + path_b.len() - 2 * lca - 1);
        out.extend(path_a[lca + 1..].iter().rev().map(|&i| &self.node(i).item));
        out.extend(path_b[lca..].iter().map(|&i| &self.node(i).item));
        out
    }

    /// [`AvlTree::path_between_keys`] for the keys of two items.
    pub fn path_between(&self, a: &T, b: &T) -> Vec<&T> {
        self.path_between_keys(&self.key_of(a), &self.key_of(b))
    }

    /// Direction code of `key`: `'0'` for every left turn and `'1'` for every
    /// right turn taken from the root. The root's code is empty.
    pub fn code_for_key(&self, key: &K) -> Option<String> {
        let mut code = String::new();
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = self.compare(key, &self.key_at(i));
            if cmp == 0 {
                return Some(code);
            }
            let node = self.node(i);
            if cmp < 0 {
                code.push('0');
                curr = node.l();
            } else {
                code.push('1');
                curr = node.r();
            }
        }
        None
    }

    /// [`AvlTree::code_for_key`] for the key of `item`.
    pub fn code_for(&self, item: &T) -> Option<String> {
        self.code_for_key(&self.key_of(item))
    }
}
