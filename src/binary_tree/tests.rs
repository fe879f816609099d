use super::*;
use alloc::vec::Vec;
use crate::{
    storage::Storage,
    traversal::{Order, VisitWhile},
    util::height_from_children,
};

/// Checks the parent links, cached heights and size of the whole tree.
#[track_caller]
pub(crate) fn assert_invariants<T, K, S>(tree: &BinaryTree<T, K, S>)
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    let root = match tree.root() {
        Some(root) => root,
        None => {
            assert_eq!(tree.size(), 0, "empty tree with nonzero size");
            return;
        }
    };
    assert!(root.is_root(), "root node has a parent");
    let mut count = 0;
    for key in tree.keys(Order::PreOrder) {
        let node = tree.node(&key);
        for child in node.children() {
            assert_eq!(
                child.parent().map(NodeRef::into_raw_key),
                Some(key.clone()),
                "child of {:?} does not link back to it", key,
            );
        }
        assert_eq!(
            node.height(),
            height_from_children(
                node.left_child().map(|x| x.height()),
                node.right_child().map(|x| x.height()),
            ),
            "stale height at {:?}", key,
        );
        count += 1;
    }
    assert_eq!(tree.size(), count, "size does not match the node count");
}

/// Shape:
/// ```text
///        1
///      /   \
///     2     3
///    / \   / \
///   4   5 6   7
///              \
///               8
/// ```
fn sample() -> (BinaryTree<u32>, [usize; 8]) {
    let mut tree = BinaryTree::new();
    let n1 = tree.insert_as_root(1);
    let n2 = tree.insert_as_left_child(&n1, 2);
    let n3 = tree.insert_as_right_child(&n1, 3);
    let n4 = tree.insert_as_left_child(&n2, 4);
    let n5 = tree.insert_as_right_child(&n2, 5);
    let n6 = tree.insert_as_left_child(&n3, 6);
    let n7 = tree.insert_as_right_child(&n3, 7);
    let n8 = tree.insert_as_right_child(&n7, 8);
    (tree, [n1, n2, n3, n4, n5, n6, n7, n8])
}

fn collect(tree: &BinaryTree<u32>, order: Order) -> Vec<u32> {
    let mut values = Vec::new();
    tree.traverse(order, |x: &u32| values.push(*x));
    values
}

#[test]
fn traversal_orders() {
    let (tree, _) = sample();
    assert_invariants(&tree);
    assert_eq!(collect(&tree, Order::LevelOrder), [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(collect(&tree, Order::PreOrder), [1, 2, 4, 5, 3, 6, 7, 8]);
    assert_eq!(collect(&tree, Order::InOrder), [4, 2, 5, 1, 6, 3, 7, 8]);
    assert_eq!(collect(&tree, Order::PostOrder), [4, 5, 2, 6, 8, 7, 3, 1]);

    let mut in_order = Vec::new();
    tree.traverse_in_order(|x| in_order.push(*x));
    assert_eq!(in_order, collect(&tree, Order::InOrder));
    assert!(tree.values(Order::PostOrder).copied().eq(collect(&tree, Order::PostOrder)));
}

#[test]
fn subtree_traversal() {
    let (tree, [_, _, n3, ..]) = sample();
    let subtree = tree.node(&n3);
    assert_eq!(subtree.values(Order::PreOrder).copied().collect::<Vec<_>>(), [3, 6, 7, 8]);
    assert_eq!(subtree.values(Order::LevelOrder).copied().collect::<Vec<_>>(), [3, 6, 7, 8]);
    assert_eq!(subtree.size(), 4);
}

#[test]
fn early_stop() {
    let (tree, _) = sample();
    let mut seen = Vec::new();
    let finished = tree.traverse(
        Order::LevelOrder,
        VisitWhile::new(|x: &u32| {
            seen.push(*x);
            *x != 4
        }),
    );
    assert!(!finished);
    assert_eq!(seen, [1, 2, 3, 4]);
}

#[test]
fn empty_tree() {
    let mut tree = BinaryTree::<u32>::new();
    assert_invariants(&tree);
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert!(tree.root_mut().is_none());
    for order in [Order::PreOrder, Order::InOrder, Order::PostOrder, Order::LevelOrder].iter() {
        assert!(tree.traverse(*order, |_: &u32| {
            panic!("visited a node of an empty tree");
        }));
    }
    assert_eq!(tree.keys(Order::InOrder).count(), 0);
}

#[test]
fn heights() {
    let (mut tree, [n1, n2, n3, n4, _, _, n7, n8]) = sample();
    assert_eq!(tree.node(&n1).height(), 3);
    assert_eq!(tree.node(&n2).height(), 1);
    assert_eq!(tree.node(&n3).height(), 2);
    assert_eq!(tree.node(&n7).height(), 1);
    assert_eq!(tree.node(&n8).height(), 0);
    assert_eq!(height_of(tree.node(&n4).left_child()), -1);

    // Growing the shallow side of the root leaves its height alone
    let n9 = tree.insert_as_left_child(&n4, 9);
    assert_eq!(tree.node(&n4).height(), 1);
    assert_eq!(tree.node(&n2).height(), 2);
    assert_eq!(tree.node(&n1).height(), 3);
    // Growing the deep side does not
    tree.insert_as_left_child(&n9, 10);
    assert_eq!(tree.node(&n1).height(), 4);
    assert_invariants(&tree);
}

#[test]
fn balance() {
    let (tree, [n1, n2, n3, ..]) = sample();
    assert_eq!(tree.node(&n1).balance_factor(), -1);
    assert!(tree.node(&n1).is_avl_balanced());
    assert!(tree.node(&n2).is_balanced());
    assert_eq!(tree.node(&n3).balance_factor(), -1);
    assert!(!tree.node(&n3).is_balanced());
}

#[test]
fn predicates_and_relatives() {
    let (tree, [n1, n2, n3, n4, n5, n6, n7, n8]) = sample();
    let root = tree.node(&n1);
    assert!(root.is_root() && !root.has_parent() && root.has_both_children());
    assert!(!root.is_left_child() && !root.is_right_child());
    assert!(root.sibling().is_none() && root.uncle().is_none());

    let node = tree.node(&n7);
    assert!(node.is_right_child() && !node.is_left_child());
    assert!(node.has_child() && node.has_right_child() && !node.has_left_child());
    assert_eq!(node.sibling().map(NodeRef::into_raw_key), Some(n6));
    assert_eq!(node.uncle().map(NodeRef::into_raw_key), Some(n2));
    assert_eq!(
        node.slot().map(|(parent, side)| (parent.into_raw_key(), side)),
        Some((n3, Side::Right)),
    );
    assert!(tree.node(&n8).sibling().is_none());
    assert_eq!(tree.node(&n8).uncle().map(NodeRef::into_raw_key), Some(n6));
    assert!(tree.node(&n4).is_leaf() && tree.node(&n4).is_left_child());
    assert_eq!(tree.node(&n5).parent().map(NodeRef::into_raw_key), Some(n2));
    assert_eq!(root.children().len(), 2);
    assert_eq!(tree.node(&n7).children().len(), 1);
}

#[test]
fn in_order_neighbors() {
    let (tree, keys) = sample();
    let in_order = tree.keys(Order::InOrder).collect::<Vec<_>>();
    for window in in_order.windows(2) {
        let (a, b) = (tree.node(&window[0]), tree.node(&window[1]));
        assert_eq!(a.successor(), Some(b));
        assert_eq!(b.predecessor(), Some(a));
    }
    // 4 is the first in-order node, 8 the last
    assert!(tree.node(&keys[3]).predecessor().is_none());
    assert!(tree.node(&keys[7]).successor().is_none());
}

#[test]
fn insert_errors() {
    let (mut tree, [n1, _, n3, ..]) = sample();
    assert_eq!(
        tree.try_insert_as_root(0),
        Err(InsertError::TreeNotEmpty { value: 0 }),
    );
    let error = tree.try_insert_as_child(&n3, Side::Left, 9).unwrap_err();
    assert_eq!(error, InsertError::SlotOccupied { side: Side::Left, value: 9 });
    assert_eq!(error.value(), 9);
    let mut other = BinaryTree::with_root(10);
    assert_eq!(
        tree.try_attach(&n1, Side::Right, &mut other),
        Err(SlotOccupiedError { side: Side::Right }),
    );
    assert_eq!(other.size(), 1);
    assert_eq!(tree.size(), 8);
    assert_invariants(&tree);
}

#[test]
#[should_panic]
fn insert_into_occupied_slot() {
    let (mut tree, [n1, ..]) = sample();
    tree.insert_as_left_child(&n1, 0);
}

#[test]
fn remove_subtree() {
    let (mut tree, [n1, _, n3, ..]) = sample();
    assert_eq!(tree.remove_subtree(&n3), 4);
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.node(&n1).height(), 2);
    assert!(!tree.node(&n1).has_right_child());
    assert_eq!(collect(&tree, Order::LevelOrder), [1, 2, 4, 5]);
    assert_invariants(&tree);

    assert_eq!(tree.remove_subtree(&n1), 4);
    assert!(tree.is_empty());
    assert_invariants(&tree);
}

#[test]
fn secede_and_reattach() {
    let (mut tree, [n1, n2, n3, ..]) = sample();
    assert!(tree.secede_subtree(&n1).is_none());
    assert_eq!(tree.size(), 8);

    let mut seceded = tree.secede_subtree(&n3).expect("not the root");
    assert_eq!(tree.size(), 4);
    assert_eq!(tree.node(&n1).height(), 2);
    assert_eq!(seceded.size(), 4);
    assert_eq!(seceded.root().map(|x| x.height()), Some(2));
    assert_eq!(collect(&seceded, Order::PreOrder), [3, 6, 7, 8]);
    assert_invariants(&tree);
    assert_invariants(&seceded);

    assert_eq!(tree.attach_as_right_child(&n1, &mut seceded), n1);
    assert!(seceded.is_empty());
    assert_eq!(seceded.size(), 0);
    assert_eq!(tree.size(), 8);
    assert_eq!(tree.node(&n1).height(), 3);
    assert_eq!(collect(&tree, Order::LevelOrder), [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(collect(&tree, Order::PostOrder), [4, 5, 2, 6, 8, 7, 3, 1]);
    assert_invariants(&tree);

    // Attaching an empty tree changes nothing
    let mut empty = BinaryTree::new();
    let leaf = tree.node(&n2).left_child().map(NodeRef::into_raw_key).expect("has a left child");
    tree.attach_as_left_child(&leaf, &mut empty);
    assert_eq!(tree.size(), 8);
    assert_invariants(&tree);
}

#[test]
fn node_ref_mut_edits() {
    let mut tree = BinaryTree::<_>::with_root(String::from("root"));
    let mut root = tree.root_mut().expect("has a root");
    root.insert_as_left_child(String::from("left"));
    let right = root.insert_as_right_child(String::from("right"));
    root.value_mut().push('!');
    assert_eq!(root.height(), 1);
    {
        let mut left = root.left_child_mut().expect("just inserted");
        left.insert_as_left_child(String::from("left-left"));
        assert_eq!(left.parent().map(|x| x.value().as_str()), Some("root!"));
    }
    assert_eq!(root.height(), 2);
    assert_eq!(tree.size(), 4);
    assert_invariants(&tree);

    let mut other = BinaryTree::<_>::with_root(String::from("grafted"));
    tree.node_mut(&right).attach_as_left_child(&mut other);
    assert_eq!(tree.size(), 5);
    let left = tree.root().and_then(|x| x.left_child()).map(NodeRef::into_raw_key).expect("exists");
    let seceded = tree.node_mut(&left).secede().expect("not the root");
    assert_eq!(seceded.size(), 2);
    assert_eq!(tree.size(), 3);
    assert_invariants(&tree);
    let root_key = tree.root_key().cloned().expect("has a root");
    assert!(tree.node_mut(&root_key).secede().is_none());
    assert_eq!(tree.node_mut(&right).remove_subtree(), 2);
    assert_eq!(tree.size(), 1);
    assert_invariants(&tree);
}

#[test]
fn swap_values() {
    let (mut tree, [n1, _, _, _, _, _, _, n8]) = sample();
    tree.swap_values(&n1, &n8);
    assert_eq!(*tree.node(&n1).value(), 8);
    assert_eq!(*tree.node(&n8).value(), 1);
    tree.swap_values(&n1, &n1);
    assert_eq!(*tree.node(&n1).value(), 8);
    assert_eq!(tree.node(&n1).height(), 3);
    assert_invariants(&tree);
}

#[test]
fn swap_values_with_bad_key_moves_nothing() {
    use std::panic::{catch_unwind, AssertUnwindSafe};
    let mut tree = BinaryTree::<_>::with_root(String::from("root"));
    let root = tree.root_key().cloned().expect("has a root");
    let child = tree.insert_as_left_child(&root, String::from("child"));
    let result = catch_unwind(AssertUnwindSafe(|| tree.swap_values(&root, &(child + 100))));
    assert!(result.is_err());
    let result = catch_unwind(AssertUnwindSafe(|| tree.swap_values(&(child + 100), &child)));
    assert!(result.is_err());
    assert_eq!(tree.node(&root).value(), "root");
    assert_eq!(tree.node(&child).value(), "child");
    tree.swap_values(&root, &child);
    assert_eq!(tree.node(&root).value(), "child");
    assert_eq!(tree.node(&child).value(), "root");
}

#[test]
fn clear_and_reuse() {
    let (mut tree, _) = sample();
    tree.clear();
    assert!(tree.is_empty());
    let root = tree.insert_as_root(1);
    assert_eq!(tree.node(&root).height(), 0);
    assert_invariants(&tree);
}

#[test]
fn degenerate_chain() {
    let mut tree = BinaryTree::<_>::with_capacity(3_000);
    let mut last = tree.insert_as_root(0_u32);
    for i in 1..3_000 {
        last = tree.insert_as_left_child(&last, i);
    }
    assert_eq!(tree.root().map(|x| x.height()), Some(2_999));
    assert_eq!(tree.keys(Order::PostOrder).count(), 3_000);
    let second = tree.root().and_then(|x| x.left_child()).map(NodeRef::into_raw_key).expect("exists");
    let seceded = tree.secede_subtree(&second).expect("not the root");
    assert_eq!(seceded.size(), 2_999);
    assert_eq!(tree.root().map(|x| x.height()), Some(0));
}

#[test]
fn clone_is_independent() {
    let (mut tree, [n1, n2, ..]) = sample();
    let copy = tree.clone();
    assert_invariants(&copy);
    assert_eq!(copy.size(), 8);
    for order in [Order::PreOrder, Order::InOrder, Order::PostOrder, Order::LevelOrder].iter() {
        assert_eq!(collect(&copy, *order), collect(&tree, *order));
    }
    assert_eq!(copy.root().map(|x| x.height()), Some(3));

    tree.remove_subtree(&n2);
    *tree.node_mut(&n1).value_mut() = 10;
    assert_eq!(collect(&copy, Order::PreOrder), [1, 2, 4, 5, 3, 6, 7, 8]);
    assert_eq!(collect(&tree, Order::PreOrder), [10, 3, 6, 7, 8]);

    let empty = BinaryTree::<u32>::new().clone();
    assert!(empty.is_empty() && empty.root().is_none());
}

#[test]
fn keys_stay_valid_after_removals() {
    let (mut tree, [n1, n2, n3, n4, _, n6, n7, n8]) = sample();
    assert_eq!(tree.remove_subtree(&n2), 3);
    assert_eq!(tree.remove_subtree(&n6), 1);
    assert_eq!(tree.root_key(), Some(&n1));
    assert_eq!(*tree.node(&n3).value(), 3);
    assert_eq!(tree.node(&n8).parent().map(NodeRef::into_raw_key), Some(n7));
    assert_invariants(&tree);
    // The hole left behind by a removed node still lies inside the storage
    assert!(tree.get(&n4).is_some());
    assert!(tree.get(&(n8 + 100)).is_none());
    assert!(tree.get_mut(&(n8 + 100)).is_none());
    // Holes get reused by later insertions
    let reused = tree.insert_as_left_child(&n1, 2);
    assert!(reused <= n8);
    assert_invariants(&tree);
}

#[test]
#[should_panic]
fn removed_key_panics_on_access() {
    let (mut tree, [_, _, _, n4, ..]) = sample();
    tree.remove_subtree(&n4);
    let _value = tree.get(&n4).map(|x| *x.value());
}

#[test]
#[should_panic(expected = "list storages which shift elements are not supported")]
fn shifting_storage_is_rejected() {
    let mut tree = BinaryTree::<u32, usize, Vec<Node<u32, usize>>>::new();
    let root = tree.insert_as_root(5);
    let left = tree.insert_as_left_child(&root, 3);
    tree.insert_as_right_child(&root, 8);
    assert_invariants(&tree);
    tree.remove_subtree(&left);
}
