use avl_forest::{default_comparator, AvlError, AvlTree};

fn tree_of(items: &[i32]) -> AvlTree<i32, i32> {
    let mut tree = AvlTree::new();
    for &x in items {
        tree.insert(x).unwrap();
    }
    tree
}

fn in_order(tree: &AvlTree<i32, i32>) -> Vec<i32> {
    let mut out = Vec::new();
    tree.for_each_in_order(|x| out.push(*x));
    out
}

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: u32,
    owner: &'static str,
}

#[test]
fn avl_tree_insert_search_matrix() {
    let tree = tree_of(&[50, 25, 75, 12, 37, 62, 90]);
    assert_eq!(tree.len(), 7);
    assert!(!tree.is_empty());
    for x in [50, 25, 75, 12, 37, 62, 90] {
        assert_eq!(tree.search(&x), Some(&x));
        assert!(tree.contains(&x));
        assert!(tree.contains_key(&x));
    }
    assert_eq!(tree.search(&13), None);
    assert!(!tree.contains_key(&13));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_duplicate_key_is_rejected() {
    let mut tree = tree_of(&[2, 1, 3]);
    assert_eq!(tree.insert(3), Err(AvlError::DuplicateKey));
    assert_eq!(tree.len(), 3);
    assert_eq!(in_order(&tree), vec![1, 2, 3]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_ascending_ladder_stays_balanced() {
    let mut tree = AvlTree::<i32, i32>::new();
    for i in 0..1024 {
        tree.insert(i).unwrap();
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 1024);
    // A perfectly balanced tree of 1024 nodes has height 10; AVL stays well below 1.44 log n.
    assert!(tree.height() <= 14, "height {}", tree.height());
}

#[test]
fn avl_tree_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::<i32, i32>::new();
    for i in 0..300 {
        tree.insert(i).unwrap();
    }
    for i in (0..300).step_by(3) {
        assert_eq!(tree.remove_key(&i), Some(i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 200);
    for i in 0..300 {
        if i % 3 == 0 {
            assert_eq!(tree.search(&i), None);
        } else {
            assert_eq!(tree.search(&i), Some(&i));
        }
    }
}

#[test]
fn avl_tree_remove_cases() {
    // Leaf.
    let mut tree = tree_of(&[50, 25, 75, 12]);
    assert_eq!(tree.remove_key(&12), Some(12));
    assert_eq!(in_order(&tree), vec![25, 50, 75]);
    tree.assert_valid().unwrap();

    // One child.
    let mut tree = tree_of(&[50, 25, 75, 12]);
    assert_eq!(tree.remove_key(&25), Some(25));
    assert_eq!(in_order(&tree), vec![12, 50, 75]);
    tree.assert_valid().unwrap();

    // Two children: the in-order predecessor takes the root's place.
    let mut tree = tree_of(&[50, 25, 75, 12, 37, 62, 90]);
    assert_eq!(tree.remove_key(&50), Some(50));
    assert_eq!(tree.level(0).unwrap(), vec![&37]);
    assert_eq!(in_order(&tree), vec![12, 25, 37, 62, 75, 90]);
    tree.assert_valid().unwrap();

    // Missing key.
    assert_eq!(tree.remove_key(&51), None);
    assert_eq!(tree.len(), 6);

    // Last item.
    let mut tree = tree_of(&[1]);
    assert_eq!(tree.remove(&1), Some(1));
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_remove_triggers_rotations() {
    // Removing from the short side forces an RL rotation at the root.
    let mut tree = tree_of(&[20, 10, 30, 5, 25, 40, 22]);
    assert_eq!(tree.remove_key(&5), Some(5));
    tree.assert_valid().unwrap();
    assert_eq!(tree.remove_key(&10), Some(10));
    tree.assert_valid().unwrap();
    assert_eq!(in_order(&tree), vec![20, 22, 25, 30, 40]);
}

#[test]
fn avl_tree_min_max_clear() {
    let mut tree = tree_of(&[8, 3, 10, 1, 6, 14]);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&14));

    tree.clear();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    for x in [8, 3, 10, 1, 6, 14] {
        assert_eq!(tree.search(&x), None);
    }
    tree.clear();
    assert_eq!(tree.len(), 0);

    tree.insert(4).unwrap();
    assert_eq!(tree.min(), Some(&4));
    assert_eq!(tree.max(), Some(&4));
}

#[test]
fn avl_tree_traversal_orders() {
    let tree = tree_of(&[5, 2, 8, 1, 3, 7, 9, 4, 6]);
    assert_eq!(in_order(&tree), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let mut reversed = Vec::new();
    tree.for_each_reverse_in_order(|x| reversed.push(*x));
    assert_eq!(reversed, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);

    let from_iter: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(from_iter, in_order(&tree));
    let from_ref: Vec<&i32> = (&tree).into_iter().collect();
    assert_eq!(from_ref.len(), tree.len());
}

#[test]
fn avl_tree_extracted_keys() {
    let mut tree = AvlTree::with_key(|a: &Account| a.id);
    tree.insert(Account { id: 7, owner: "ana" }).unwrap();
    tree.insert(Account { id: 3, owner: "bia" }).unwrap();
    tree.insert(Account { id: 9, owner: "caio" }).unwrap();

    assert_eq!(tree.search(&3).map(|a| a.owner), Some("bia"));
    assert!(tree.contains(&Account { id: 9, owner: "other" }));
    assert_eq!(
        tree.insert(Account { id: 7, owner: "dup" }),
        Err(AvlError::DuplicateKey)
    );

    let removed = tree.remove(&Account { id: 7, owner: "whatever" }).unwrap();
    assert_eq!(removed.owner, "ana");
    assert_eq!(tree.len(), 2);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_injected_comparator() {
    let mut tree = AvlTree::with_comparator(
        |a: &u32, b: &u32| default_comparator(b, a),
        |a: &Account| a.id,
    );
    for (id, owner) in [(1, "a"), (2, "b"), (3, "c"), (4, "d")] {
        tree.insert(Account { id, owner }).unwrap();
    }
    let ids: Vec<u32> = tree.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![4, 3, 2, 1]);
    assert_eq!(tree.min().map(|a| a.id), Some(4));
    assert_eq!(tree.max().map(|a| a.id), Some(1));
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_display_dump() {
    let empty = AvlTree::<i32, i32>::new();
    assert_eq!(empty.to_string(), "∅");

    assert_eq!(tree_of(&[2, 1, 3]).to_string(), "2\n├─ L 1\n└─ R 3");
    assert_eq!(tree_of(&[2, 1]).to_string(), "2\n├─ L 1\n└─ R ∅");
    assert_eq!(
        tree_of(&[50, 25, 75, 12]).to_string(),
        "50\n├─ L 25\n│  ├─ L 12\n│  └─ R ∅\n└─ R 75"
    );
}

#[test]
fn avl_tree_debug_output() {
    let tree = tree_of(&[2, 1, 3]);
    assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    assert!(tree.print_debug().contains("[h=1] { 2 }"));
}
