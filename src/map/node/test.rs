use compare::Natural;
use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::balance::{Avl, Balance, Color, RedBlack};
use crate::map::{AvlMap, Map, RbMap};
use super::{Link, Tree};

/// Checks the search order and the parent back-links, returning the number
/// of reachable nodes.
fn check_structure<K: Ord, V, B>(
    tree: &Tree<K, V, B>,
    link: Link,
    parent: Link,
    lo: Option<&K>,
    hi: Option<&K>,
) -> usize {
    let id = match link {
        Some(id) => id,
        None => return 0,
    };

    assert_eq!(tree.parent(id), parent, "parent link out of sync");

    let key = tree.key(id);
    if let Some(lo) = lo {
        assert!(key > lo, "left subtree key out of order");
    }
    if let Some(hi) = hi {
        assert!(key < hi, "right subtree key out of order");
    }

    1 + check_structure(tree, tree.left(id), link, lo, Some(key))
        + check_structure(tree, tree.right(id), link, Some(key), hi)
}

fn check_avl<K: Ord, V>(tree: &Tree<K, V, Avl>, link: Link) -> i32 {
    let id = match link {
        Some(id) => id,
        None => return -1,
    };

    let left = check_avl(tree, tree.left(id));
    let right = check_avl(tree, tree.right(id));

    assert!((left - right).abs() <= 1, "sibling heights differ by more than one");

    let height = 1 + left.max(right);
    assert_eq!(tree.balance(id).height(), height, "stored height is stale");
    height
}

/// Checks the color rules, returning the subtree's black height (counting
/// the nil leaves).
fn check_red_black<K: Ord, V>(tree: &Tree<K, V, RedBlack>, link: Link, parent_red: bool) -> usize {
    let id = match link {
        Some(id) => id,
        None => return 1,
    };

    let red = tree.balance(id).color() == Color::Red;
    if parent_red {
        assert!(!red, "red node has a red child");
    }

    let left = check_red_black(tree, tree.left(id), red);
    let right = check_red_black(tree, tree.right(id), red);
    assert_eq!(left, right, "black height differs between siblings");

    left + if red { 0 } else { 1 }
}

fn assert_avl_map<K: Ord, V>(map: &AvlMap<K, V>) {
    let tree = map.as_tree();
    let count = check_structure(tree, tree.root(), None, None, None);
    assert_eq!(count, map.len(), "len out of sync with reachable nodes");
    check_avl(tree, tree.root());
}

fn assert_rb_map<K: Ord, V>(map: &RbMap<K, V>) {
    let tree = map.as_tree();
    let count = check_structure(tree, tree.root(), None, None, None);
    assert_eq!(count, map.len(), "len out of sync with reachable nodes");

    if let Some(root) = tree.root() {
        assert_eq!(tree.balance(root).color(), Color::Black, "root is not black");
    }
    check_red_black(tree, tree.root(), false);
}

#[derive(Clone, Debug)]
enum Op<K> {
    Insert(K),
    Remove(usize),
}

impl<K: Arbitrary + Ord> Arbitrary for Op<K> {
    fn arbitrary(gen: &mut Gen) -> Self {
        if bool::arbitrary(gen) {
            Op::Insert(K::arbitrary(gen))
        } else {
            Op::Remove(usize::arbitrary(gen))
        }
    }
}

impl<K: Clone + Ord> Op<K> {
    fn exec<B: Balance>(self, map: &mut Map<K, (), Natural<K>, B>) {
        match self {
            Op::Insert(key) => {
                map.insert(key, ());
            }
            Op::Remove(index) => {
                if !map.is_empty() {
                    let key = map.iter().nth(index % map.len()).unwrap().0.clone();
                    assert!(map.remove(&key).is_some());
                }
            }
        }
    }
}

#[test]
fn avl_ops_keep_invariants() {
    fn check(ops: Vec<Op<u32>>) -> TestResult {
        let mut map = AvlMap::new();

        for op in ops {
            op.exec(&mut map);
            assert_avl_map(&map);
        }

        TestResult::passed()
    }

    quickcheck(check as fn(Vec<Op<u32>>) -> TestResult);
}

#[test]
fn rb_ops_keep_invariants() {
    fn check(ops: Vec<Op<u32>>) -> TestResult {
        let mut map = RbMap::new();

        for op in ops {
            op.exec(&mut map);
            assert_rb_map(&map);
        }

        TestResult::passed()
    }

    quickcheck(check as fn(Vec<Op<u32>>) -> TestResult);
}

// Ascending insertions lean right-right: the third key forces a single
// rotation that lifts the middle key to the root.
#[test]
fn ascending_avl_insertions_rotate_once() {
    let mut map = AvlMap::new();
    map.insert(10, ());
    map.insert(20, ());
    map.insert(30, ());

    let tree = map.as_tree();
    let root = tree.root().unwrap();
    assert_eq!(*tree.key(root), 20);
    assert_eq!(tree.balance(root).height(), 1);
    assert_eq!(tree.left(root).map(|id| *tree.key(id)), Some(10));
    assert_eq!(tree.right(root).map(|id| *tree.key(id)), Some(30));
    assert_avl_map(&map);
}

// Descending insertions produce two consecutive reds with a missing uncle;
// the fix-up rotates the middle key up and recolors it black.
#[test]
fn descending_rb_insertions_recolor_and_rotate() {
    let mut map = RbMap::new();
    map.insert(30, ());
    map.insert(20, ());
    map.insert(10, ());

    let tree = map.as_tree();
    let root = tree.root().unwrap();
    assert_eq!(*tree.key(root), 20);
    assert_eq!(tree.balance(root).color(), Color::Black);

    let left = tree.left(root).unwrap();
    let right = tree.right(root).unwrap();
    assert_eq!(*tree.key(left), 10);
    assert_eq!(*tree.key(right), 30);
    assert_eq!(tree.balance(left).color(), Color::Red);
    assert_eq!(tree.balance(right).color(), Color::Red);
    assert_rb_map(&map);
}

// Removing 6 unbalances the root while its right child's subtrees tie in
// height; the restructure must stay zig-zig (single rotation), since
// lifting the inner grandchild would leave 12 unbalanced below the new
// top, where the walk never looks again.
#[test]
fn avl_removal_tie_restructures_toward_the_heavy_side() {
    let mut map = AvlMap::new();
    for key in [8, 4, 12, 6, 10, 14, 9, 13, 15] {
        map.insert(key, ());
    }
    assert_avl_map(&map);

    assert!(map.remove(&6).is_some());
    assert_avl_map(&map);

    let tree = map.as_tree();
    let root = tree.root().unwrap();
    assert_eq!(*tree.key(root), 12);
    assert_eq!(tree.left(root).map(|id| *tree.key(id)), Some(8));
    assert_eq!(tree.right(root).map(|id| *tree.key(id)), Some(14));
}

#[test]
fn avl_survives_removing_the_root_twice() {
    let mut map = AvlMap::new();
    for key in [40, 20, 60, 10, 30, 50, 70] {
        map.insert(key, ());
    }

    for _ in 0..2 {
        let root = *map.as_tree().root().map(|id| map.as_tree().key(id)).unwrap();
        assert!(map.remove(&root).is_some());
        assert_avl_map(&map);
    }

    assert_eq!(map.len(), 5);
    let keys: Vec<u32> = map.iter().map(|e| *e.0).collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn rb_survives_removing_the_root_twice() {
    let mut map = RbMap::new();
    for key in [40, 20, 60, 10, 30, 50, 70] {
        map.insert(key, ());
    }

    for _ in 0..2 {
        let root = *map.as_tree().root().map(|id| map.as_tree().key(id)).unwrap();
        assert!(map.remove(&root).is_some());
        assert_rb_map(&map);
    }

    assert_eq!(map.len(), 5);
    let keys: Vec<u32> = map.iter().map(|e| *e.0).collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn shuffled_stress_keeps_both_disciplines_balanced() {
    let mut rng = StdRng::seed_from_u64(0xbadc_0ffe);
    let mut keys: Vec<u32> = (0..512).collect();

    keys.shuffle(&mut rng);
    let mut avl = AvlMap::new();
    let mut rb = RbMap::new();
    for &key in &keys {
        avl.insert(key, key);
        rb.insert(key, key);
    }

    assert_avl_map(&avl);
    assert_rb_map(&rb);
    assert!(avl.iter().map(|e| *e.0).eq(0..512));
    assert!(rb.iter().map(|e| *e.0).eq(0..512));

    keys.shuffle(&mut rng);
    for (i, &key) in keys.iter().enumerate() {
        assert_eq!(avl.remove(&key), Some((key, key)));
        assert_eq!(rb.remove(&key), Some((key, key)));

        if i % 32 == 0 {
            assert_avl_map(&avl);
            assert_rb_map(&rb);
        }
    }

    assert!(avl.is_empty());
    assert!(rb.is_empty());
}
