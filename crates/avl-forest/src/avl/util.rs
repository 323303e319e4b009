use std::fmt::Debug;

use log::trace;

use crate::error::AvlError;
use crate::types::ItemNode;
use crate::util::{get_l, get_r, last, pair_mut, replace_child, set_l, set_r};

use super::types::AvlNodeLike;

/// Height of the subtree at `node`; `-1` when empty.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &[N], node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].h())
}

#[inline]
fn update_height<N: AvlNodeLike>(arena: &mut [N], i: u32) {
    let lh = height(arena, get_l(arena, i));
    let rh = height(arena, get_r(arena, i));
    arena[i as usize].set_h(1 + lh.max(rh));
}

/// Signed balance factor, `height(left) - height(right)`.
#[inline]
pub fn balance_factor<N: AvlNodeLike>(arena: &[N], i: u32) -> i32 {
    height(arena, get_l(arena, i)) - height(arena, get_r(arena, i))
}

/// Single right rotation around `n` (left-left case). Returns the new subtree root.
pub fn ll_rotate<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let nl = get_l(arena, n).expect("ll rotation needs a left child");
    trace!("ll rotation at node {n}");
    let nlr = get_r(arena, nl);
    set_l(arena, n, nlr);
    set_r(arena, nl, Some(n));
    update_height(arena, n);
    update_height(arena, nl);
    nl
}

/// Single left rotation around `n` (right-right case). Returns the new subtree root.
pub fn rr_rotate<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let nr = get_r(arena, n).expect("rr rotation needs a right child");
    trace!("rr rotation at node {n}");
    let nrl = get_l(arena, nr);
    set_r(arena, n, nrl);
    set_l(arena, nr, Some(n));
    update_height(arena, n);
    update_height(arena, nr);
    nr
}

/// Left-right double rotation.
pub fn lr_rotate<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let nl = get_l(arena, n).expect("lr rotation needs a left child");
    let nl = rr_rotate(arena, nl);
    set_l(arena, n, Some(nl));
    ll_rotate(arena, n)
}

/// Right-left double rotation.
pub fn rl_rotate<N: AvlNodeLike>(arena: &mut [N], n: u32) -> u32 {
    let nr = get_r(arena, n).expect("rl rotation needs a right child");
    let nr = ll_rotate(arena, nr);
    set_r(arena, n, Some(nr));
    rr_rotate(arena, n)
}

fn key_at<T, N, K, F>(arena: &[N], i: u32, key_of: &F) -> K
where
    N: ItemNode<T>,
    F: Fn(&T) -> K,
{
    key_of(arena[i as usize].item())
}

fn insert_rec<T, N, K, F, C>(
    arena: &mut [N],
    curr: Option<u32>,
    n: u32,
    key: &K,
    key_of: &F,
    comparator: &C,
) -> Result<u32, AvlError>
where
    N: AvlNodeLike + ItemNode<T>,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    let Some(r) = curr else {
        return Ok(n);
    };

    let cmp = comparator(key, &key_at(arena, r, key_of));
    if cmp == 0 {
        return Err(AvlError::DuplicateKey);
    }

    if cmp < 0 {
        let l = insert_rec(arena, get_l(arena, r), n, key, key_of, comparator)?;
        set_l(arena, r, Some(l));
        update_height(arena, r);
        if balance_factor(arena, r) > 1 {
            return Ok(if comparator(key, &key_at(arena, l, key_of)) < 0 {
                ll_rotate(arena, r)
            } else {
                lr_rotate(arena, r)
            });
        }
    } else {
        let rc = insert_rec(arena, get_r(arena, r), n, key, key_of, comparator)?;
        set_r(arena, r, Some(rc));
        update_height(arena, r);
        if balance_factor(arena, r) < -1 {
            return Ok(if comparator(key, &key_at(arena, rc, key_of)) > 0 {
                rr_rotate(arena, r)
            } else {
                rl_rotate(arena, r)
            });
        }
    }
    Ok(r)
}

/// Links the detached node `n` into the tree rooted at `root`.
///
/// Returns the new root. On [`AvlError::DuplicateKey`] the tree is left
/// untouched and `n` stays detached.
pub fn insert<T, N, K, F, C>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
    key_of: &F,
    comparator: &C,
) -> Result<u32, AvlError>
where
    N: AvlNodeLike + ItemNode<T>,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    let key = key_at(arena, n, key_of);
    insert_rec(arena, root, n, &key, key_of, comparator)
}

/// Restores balance at `r` after its left subtree shrank.
fn rebalance_left_shrunk<N: AvlNodeLike>(arena: &mut [N], r: u32) -> u32 {
    update_height(arena, r);
    if balance_factor(arena, r) < -1 {
        let rc = get_r(arena, r).expect("right-heavy node has a right child");
        return if height(arena, get_r(arena, rc)) >= height(arena, get_l(arena, rc)) {
            rr_rotate(arena, r)
        } else {
            rl_rotate(arena, r)
        };
    }
    r
}

/// Restores balance at `r` after its right subtree shrank.
fn rebalance_right_shrunk<N: AvlNodeLike>(arena: &mut [N], r: u32) -> u32 {
    update_height(arena, r);
    if balance_factor(arena, r) > 1 {
        let lc = get_l(arena, r).expect("left-heavy node has a left child");
        return if height(arena, get_l(arena, lc)) >= height(arena, get_r(arena, lc)) {
            ll_rotate(arena, r)
        } else {
            lr_rotate(arena, r)
        };
    }
    r
}

fn remove_rec<T, N, K, F, C>(
    arena: &mut [N],
    curr: Option<u32>,
    key: &K,
    key_of: &F,
    comparator: &C,
    removed: &mut Option<u32>,
) -> Option<u32>
where
    N: AvlNodeLike + ItemNode<T>,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    let r = curr?;
    let cmp = comparator(key, &key_at(arena, r, key_of));

    if cmp < 0 {
        let l = remove_rec(arena, get_l(arena, r), key, key_of, comparator, removed);
        set_l(arena, r, l);
        return Some(rebalance_left_shrunk(arena, r));
    }
    if cmp > 0 {
        let rc = remove_rec(arena, get_r(arena, r), key, key_of, comparator, removed);
        set_r(arena, r, rc);
        return Some(rebalance_right_shrunk(arena, r));
    }

    match (get_l(arena, r), get_r(arena, r)) {
        (Some(l), Some(_)) => {
            // Copy-up: detach the in-order predecessor, then move its item here.
            let pred = last(arena, Some(l)).expect("non-empty left subtree");
            let pred_key = key_at(arena, pred, key_of);
            let l = remove_rec(arena, Some(l), &pred_key, key_of, comparator, removed);
            set_l(arena, r, l);
            debug_assert_eq!(*removed, Some(pred));
            let (node, pred_node) = pair_mut(arena, r, pred);
            std::mem::swap(node.item_mut(), pred_node.item_mut());
            Some(rebalance_left_shrunk(arena, r))
        }
        (child, None) | (None, child) => {
            set_l(arena, r, None);
            set_r(arena, r, None);
            *removed = Some(r);
            child
        }
    }
}

/// Unlinks the node holding `key` from the tree rooted at `root`.
///
/// Returns the new root and the index of the detached node, whose slot now
/// holds the removed item. The detached slot is still in the arena; see
/// [`release`].
pub fn remove<T, N, K, F, C>(
    arena: &mut [N],
    root: Option<u32>,
    key: &K,
    key_of: &F,
    comparator: &C,
) -> (Option<u32>, Option<u32>)
where
    N: AvlNodeLike + ItemNode<T>,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    let mut removed = None;
    let new_root = remove_rec(arena, root, key, key_of, comparator, &mut removed);
    (new_root, removed)
}

/// Frees the detached slot `n`, moving the last arena node into it.
///
/// The moved node's parent is located by descending from `root` with its
/// key. Returns the (possibly re-indexed) root and the freed node.
pub fn release<T, N, K, F, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    n: u32,
    key_of: &F,
    comparator: &C,
) -> (Option<u32>, N)
where
    N: AvlNodeLike + ItemNode<T>,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    let moved_from = (arena.len() - 1) as u32;
    let node = arena.swap_remove(n as usize);
    if moved_from == n {
        return (root, node);
    }

    trace!("arena compaction: node {moved_from} -> {n}");
    if root == Some(moved_from) {
        return (Some(n), node);
    }

    let key = key_at(arena, n, key_of);
    let mut curr = root;
    while let Some(p) = curr {
        if replace_child(arena, p, moved_from, n) {
            break;
        }
        curr = if comparator(&key, &key_at(arena, p, key_of)) < 0 {
            get_l(arena, p)
        } else {
            get_r(arena, p)
        };
    }
    (root, node)
}

/// Calls `f` for every item at exactly `depth` levels below `node`, left to right.
pub fn visit_level<'a, T, N, G>(arena: &'a [N], node: Option<u32>, depth: i32, f: &mut G)
where
    N: ItemNode<T>,
    G: FnMut(&'a T),
    T: 'a,
{
    let Some(i) = node else {
        return;
    };
    if depth == 0 {
        f(arena[i as usize].item());
        return;
    }
    visit_level(arena, get_l(arena, i), depth - 1, f);
    visit_level(arena, get_r(arena, i), depth - 1, f);
}

/// Left, self, right.
pub fn in_order<'a, T, N, G>(arena: &'a [N], node: Option<u32>, f: &mut G)
where
    N: ItemNode<T>,
    G: FnMut(&'a T),
    T: 'a,
{
    if let Some(i) = node {
        in_order(arena, get_l(arena, i), f);
        f(arena[i as usize].item());
        in_order(arena, get_r(arena, i), f);
    }
}

/// Right, self, left.
pub fn reverse_in_order<'a, T, N, G>(arena: &'a [N], node: Option<u32>, f: &mut G)
where
    N: ItemNode<T>,
    G: FnMut(&'a T),
    T: 'a,
{
    if let Some(i) = node {
        reverse_in_order(arena, get_r(arena, i), f);
        f(arena[i as usize].item());
        reverse_in_order(arena, get_l(arena, i), f);
    }
}

pub fn assert_avl_tree<T, N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key_of: &F,
    comparator: &C,
) -> Result<(), String>
where
    N: AvlNodeLike + ItemNode<T>,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> i32,
{
    fn validate_heights<N: AvlNodeLike>(
        arena: &[N],
        node: Option<u32>,
        seen: &mut usize,
    ) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(-1);
        };
        *seen += 1;
        if *seen > arena.len() {
            return Err("Cycle or shared node detected".to_string());
        }
        let lh = validate_heights(arena, get_l(arena, i), seen)?;
        let rh = validate_heights(arena, get_r(arena, i), seen)?;
        let expected = 1 + lh.max(rh);
        let actual = arena[i as usize].h();
        if actual != expected {
            return Err(format!(
                "Height mismatch at node {i}: expected {expected}, got {actual}"
            ));
        }
        if (lh - rh).abs() > 1 {
            return Err(format!("AVL balance violated at node {i}"));
        }
        Ok(expected)
    }

    let mut seen = 0;
    validate_heights(arena, root, &mut seen)?;
    if seen != arena.len() {
        return Err(format!(
            "Arena holds {} nodes but {seen} are reachable",
            arena.len()
        ));
    }

    let mut prev: Option<K> = None;
    let mut ordered = true;
    in_order(arena, root, &mut |item: &T| {
        let key = key_of(item);
        if let Some(p) = &prev {
            if comparator(p, &key) >= 0 {
                ordered = false;
            }
        }
        prev = Some(key);
    });
    if !ordered {
        return Err("Node order violated".to_string());
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<T, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    T: Debug,
    N: AvlNodeLike + ItemNode<T>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<T, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<T, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.h(),
                n.item()
            )
        }
    }
}
