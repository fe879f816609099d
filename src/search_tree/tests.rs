use super::*;
use alloc::vec::Vec;
use std::collections::BTreeSet;
use quickcheck::{Arbitrary, Gen};
use crate::binary_tree::tests::assert_invariants;

fn in_order<T: Ord + Clone>(tree: &SearchTree<T>) -> Vec<T> {
    tree.iter().cloned().collect()
}

#[test]
fn removal_scenario() {
    // Tenfold values so that 115 can sit between 110 and 120
    let mut tree: SearchTree<i32> = vec![100, 40, 120, 110, 130, 30, 60].into_iter().collect();
    assert_eq!(in_order(&tree), [30, 40, 60, 100, 110, 120, 130]);
    assert_invariants(tree.as_binary_tree());

    assert!(tree.remove(&100));
    assert_eq!(tree.root().map(|x| *x.value()), Some(110));
    assert_eq!(in_order(&tree), [30, 40, 60, 110, 120, 130]);
    assert_invariants(tree.as_binary_tree());

    assert!(tree.remove(&30));
    assert_eq!(in_order(&tree), [40, 60, 110, 120, 130]);

    tree.insert(115);
    assert!(tree.remove(&120));
    assert_eq!(in_order(&tree), [40, 60, 110, 115, 130]);
    let node = tree.search(&130).0.expect("130 is present");
    assert_eq!(node.left_child().map(|x| *x.value()), Some(115));
    assert!(node.right_child().is_none());
    assert_invariants(tree.as_binary_tree());

    assert!(!tree.remove(&300));
    assert_eq!(tree.size(), 5);
    assert_eq!(in_order(&tree), [40, 60, 110, 115, 130]);

    assert!(tree.remove(&130));
    assert_eq!(in_order(&tree), [40, 60, 110, 115]);
    assert_eq!(tree.size(), 4);
    assert_invariants(tree.as_binary_tree());
}

#[test]
fn search_reports_the_parent() {
    let tree: SearchTree<i32> = vec![10, 4, 12, 11].into_iter().collect();
    let (hit, parent) = tree.search(&10);
    assert_eq!(hit.map(|x| *x.value()), Some(10));
    assert!(parent.is_none());
    let (hit, parent) = tree.search(&11);
    assert_eq!(hit.map(|x| *x.value()), Some(11));
    assert_eq!(parent.map(|x| *x.value()), Some(12));
    let (hit, parent) = tree.search(&13);
    assert!(hit.is_none());
    assert_eq!(parent.map(|x| *x.value()), Some(12));

    let empty = SearchTree::<i32>::new();
    let (hit, parent) = empty.search(&1);
    assert!(hit.is_none() && parent.is_none());
}

#[test]
fn duplicate_insert() {
    let mut tree = SearchTree::<_>::new();
    let first = tree.insert(5);
    tree.insert(3);
    assert_eq!(tree.insert(5), first);
    assert_eq!(tree.size(), 2);
    assert_invariants(tree.as_binary_tree());
}

#[test]
fn queries() {
    let mut tree: SearchTree<String> = ["pear", "apple", "quince", "fig"]
        .iter()
        .map(|x| String::from(*x))
        .collect();
    assert!(tree.contains("fig"));
    assert!(!tree.contains("kiwi"));
    assert_eq!(tree.get("pear").map(String::as_str), Some("pear"));
    assert_eq!(tree.min().map(String::as_str), Some("apple"));
    assert_eq!(tree.max().map(String::as_str), Some("quince"));
    assert_eq!(tree.take("apple"), Some(String::from("apple")));
    assert_eq!(tree.take("apple"), None);
    assert_eq!(tree.min().map(String::as_str), Some("fig"));
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.min().is_none() && tree.max().is_none());
}

#[test]
fn remove_root_until_empty() {
    let mut tree: SearchTree<u8> = (0..20).map(|x| (x * 7) % 20).collect();
    while let Some(root) = tree.root().map(|x| *x.value()) {
        assert!(tree.remove(&root));
        assert_invariants(tree.as_binary_tree());
    }
    assert_eq!(tree.size(), 0);
}

#[test]
fn degenerate_insertion_order() {
    let tree: SearchTree<u32> = (0..1_000).collect();
    assert_eq!(tree.root().map(|x| x.height()), Some(999));
    assert_eq!(tree.iter().count(), 1_000);
    assert!(tree.iter().copied().eq(0..1_000));
}

#[test]
fn clone_is_independent() {
    let mut tree: SearchTree<i32> = vec![100, 40, 120, 110, 130, 30, 60].into_iter().collect();
    let copy = tree.clone();
    assert_invariants(copy.as_binary_tree());
    assert!(tree.remove(&100));
    tree.insert(50);
    assert_eq!(in_order(&copy), [30, 40, 60, 100, 110, 120, 130]);
    assert_eq!(in_order(&tree), [30, 40, 50, 60, 110, 120, 130]);
    assert_eq!(
        copy.keys(Order::LevelOrder).map(|key| *copy.as_binary_tree().node(&key).value()).collect::<Vec<_>>(),
        [100, 40, 120, 30, 60, 110, 130],
    );
}

#[test]
#[should_panic(expected = "list storages which shift elements are not supported")]
fn shifting_storage_is_rejected() {
    let mut tree = SearchTree::<u32, usize, Vec<Node<u32, usize>>>::new();
    for x in [5, 3, 8].iter().copied() {
        tree.insert(x);
    }
    tree.remove(&3);
}

/// Something to do to a search tree in a property test.
#[derive(Copy, Clone, Debug)]
enum Op<T> {
    Insert(T),
    Remove(T),
}
impl<T: Arbitrary> Arbitrary for Op<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i16>) -> bool {
        let tree: SearchTree<_> = xs.iter().copied().collect();
        let values = in_order(&tree);
        values.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn matches_btree_set(ops: Vec<Op<i8>>) -> bool {
        let mut tree = SearchTree::<i8>::new();
        let mut set = BTreeSet::new();
        for op in ops {
            match op {
                Op::Insert(x) => {
                    tree.insert(x);
                    set.insert(x);
                }
                Op::Remove(x) => {
                    if tree.remove(&x) != set.remove(&x) {
                        return false;
                    }
                }
            }
            assert_invariants(tree.as_binary_tree());
        }
        tree.size() == set.len() && tree.iter().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn absent_removal_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
        let mut tree: SearchTree<_> = xs.into_iter().filter(|x| *x != absent).collect();
        let before = tree.keys(Order::PreOrder).collect::<Vec<_>>();
        let size = tree.size();
        !tree.remove(&absent)
            && tree.size() == size
            && tree.keys(Order::PreOrder).collect::<Vec<_>>() == before
    }
}

quickcheck::quickcheck! {
    fn removing_any_value_drops_exactly_it(xs: Vec<u8>, pick: usize) -> bool {
        let mut tree: SearchTree<_> = xs.into_iter().collect();
        let before = in_order(&tree);
        if before.is_empty() {
            return true;
        }
        let victim = before[pick % before.len()];
        let mut expected = before;
        expected.retain(|x| *x != victim);
        tree.remove(&victim);
        assert_invariants(tree.as_binary_tree());
        in_order(&tree) == expected
    }
}
