//! Binary search trees: binary trees which keep their values ordered.
//!
//! A [`SearchTree`] holds every value at most once. For every node, all values in its left subtree compare less than its own value and all values in its right subtree compare greater, so an in-order traversal visits the values in ascending order. Lookups, insertions and removals walk down a single path and thus take time proportional to the height of the tree. Nothing keeps the tree balanced, so inserting values which are already sorted degrades it into a chain.
//!
//! The tree is built out of a [`BinaryTree`], which it exposes for reading through [`as_binary_tree`]: the heights cached by the nodes are kept up to date and can be inspected to find out how lopsided the tree is.
//!
//! # Example
//! ```rust
//! use sapwood::{SearchTree, traversal::Order};
//!
//! let mut tree = SearchTree::<_>::new();
//! for x in [10, 4, 12, 11, 13, 3, 6].iter().copied() {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.values(Order::InOrder).copied().collect::<Vec<_>>(), [3, 4, 6, 10, 11, 12, 13]);
//!
//! // Removing a node with two children moves its in-order successor into its place:
//! assert!(tree.remove(&10));
//! assert_eq!(tree.root().map(|x| *x.value()), Some(11));
//! // Absent values are reported as such:
//! assert!(!tree.remove(&30));
//! assert_eq!(tree.size(), 6);
//! ```
//!
//! [`SearchTree`]: struct.SearchTree.html " "
//! [`BinaryTree`]: ../binary_tree/struct.BinaryTree.html " "
//! [`as_binary_tree`]: struct.SearchTree.html#method.as_binary_tree " "

use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::Debug,
    iter::FromIterator,
};
use crate::{
    binary_tree::{BinaryTree, Node, NodeRef, Side},
    storage::{Storage, DefaultStorage},
    traversal::{Traversable, Traverse, Visitor, Order},
    util::trace,
};

/// A binary search tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct SearchTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: BinaryTree<T, K, S>,
}
impl<T, K, S> SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty search tree.
    #[inline]
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
        }
    }
    /// Creates an empty search tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: BinaryTree::with_capacity(capacity),
        }
    }
    /// Returns the number of values in the tree.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.tree.size()
    }
    /// Returns `true` if the tree holds no values, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
    /// Returns a reference to the root node, or `None` if the tree is empty.
    #[inline(always)]
    pub fn root(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.tree.root()
    }
    /// Returns a reference to the node with the specified key.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree.
    #[inline(always)]
    #[track_caller]
    pub fn node(&self, key: &K) -> NodeRef<'_, T, K, S> {
        self.tree.node(key)
    }
    /// Returns the underlying binary tree.
    #[inline(always)]
    pub fn as_binary_tree(&self) -> &BinaryTree<T, K, S> {
        &self.tree
    }
    /// Consumes the search tree and returns the underlying binary tree.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_binary_tree(self) -> BinaryTree<T, K, S> {
        self.tree
    }
    /// Removes all values from the tree.
    #[inline]
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the smallest value in the tree, or `None` if it's empty.
    pub fn min(&self) -> Option<&T> {
        let root = self.tree.root.clone()?;
        Some(&self.tree.node_raw(&self.extreme(root, Side::Left)).value)
    }
    /// Returns the largest value in the tree, or `None` if it's empty.
    pub fn max(&self) -> Option<&T> {
        let root = self.tree.root.clone()?;
        Some(&self.tree.node_raw(&self.extreme(root, Side::Right)).value)
    }

    /// Visits every value in the specified order. Returns `false` if the visitor stopped the traversal early, `true` otherwise.
    #[inline(always)]
    pub fn traverse<V: Visitor<T>>(&self, order: Order, visitor: V) -> bool {
        self.tree.traverse(order, visitor)
    }
    /// Visits every value in pre-order.
    #[inline(always)]
    pub fn traverse_pre_order(&self, visitor: impl FnMut(&T)) {
        self.tree.traverse_pre_order(visitor);
    }
    /// Visits every value in in-order, which is ascending order.
    #[inline(always)]
    pub fn traverse_in_order(&self, visitor: impl FnMut(&T)) {
        self.tree.traverse_in_order(visitor);
    }
    /// Visits every value in post-order.
    #[inline(always)]
    pub fn traverse_post_order(&self, visitor: impl FnMut(&T)) {
        self.tree.traverse_post_order(visitor);
    }
    /// Visits every value level by level.
    #[inline(always)]
    pub fn traverse_level_order(&self, visitor: impl FnMut(&T)) {
        self.tree.traverse_level_order(visitor);
    }
    /// Returns an iterator over the keys of all nodes in the specified order.
    #[inline(always)]
    pub fn keys(&self, order: Order) -> Traverse<'_, BinaryTree<T, K, S>> {
        self.tree.keys(order)
    }
    /// Returns an iterator over all values in the specified order.
    #[inline(always)]
    pub fn values(&self, order: Order) -> impl Iterator<Item = &T> + '_ {
        self.tree.values(order)
    }
    /// Returns an iterator over all values in ascending order.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.values(Order::InOrder)
    }

    /// Follows the links towards the specified side for as long as there are any.
    fn extreme(&self, mut key: K, side: Side) -> K {
        while let Some(next) = self.tree.node_raw(&key).child(side) {
            key = next.clone();
        }
        key
    }
}
impl<T, K, S> SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    /// Looks the specified value up.
    ///
    /// Returns the node holding the value, if any, together with the last node visited before it: the parent of the found node, or the node under which the value would be inserted if it was not found. Both are `None` for an empty tree.
    ///
    /// # Example
    /// ```rust
    /// # use sapwood::SearchTree;
    /// let tree: SearchTree<_> = vec![10, 4, 12].into_iter().collect();
    /// let (hit, parent) = tree.search(&12);
    /// assert_eq!(hit.map(|x| *x.value()), Some(12));
    /// assert_eq!(parent.map(|x| *x.value()), Some(10));
    /// let (hit, parent) = tree.search(&5);
    /// assert!(hit.is_none());
    /// assert_eq!(parent.map(|x| *x.value()), Some(4));
    /// ```
    pub fn search<Q>(&self, value: &Q) -> (Option<NodeRef<'_, T, K, S>>, Option<NodeRef<'_, T, K, S>>)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut parent = None;
        let mut current = self.tree.root();
        while let Some(node) = current {
            let next = match value.cmp(node.value().borrow()) {
                Ordering::Less => node.left_child(),
                Ordering::Greater => node.right_child(),
                Ordering::Equal => return (Some(node), parent),
            };
            parent = Some(node);
            current = next;
        }
        (None, parent)
    }
    /// Returns `true` if the tree holds the specified value, `false` otherwise.
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value).0.is_some()
    }
    /// Returns a reference to the stored value which compares equal to the specified one, or `None` if there is none.
    #[inline]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value).0.map(|x| x.value())
    }
    /// Adds the value to the tree, returning the key of the node holding it. If an equal value is already present, the tree is left as it was, the new value is dropped and the key of the existing node is returned.
    pub fn insert(&mut self, value: T) -> K {
        let (parent, side) = match self.search(&value) {
            (Some(hit), _) => return hit.into_raw_key(),
            (None, None) => return self.tree.insert_as_root(value),
            (None, Some(parent)) => {
                let side = if value < *parent.value() {
                    Side::Left
                } else {
                    Side::Right
                };
                (parent.into_raw_key(), side)
            }
        };
        match side {
            Side::Left => self.tree.insert_as_left_child(&parent, value),
            Side::Right => self.tree.insert_as_right_child(&parent, value),
        }
    }
    /// Removes the specified value from the tree. Returns `true` if it was present, `false` if the tree was left untouched.
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }
    /// Removes the specified value from the tree and returns it, or returns `None` if it was not present.
    ///
    /// A node with at most one child is replaced by that child. A node with two children instead exchanges values with its in-order successor, which has no left child and is removed in its place.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let key = self.search(value).0?.into_raw_key();
        let node = self.tree.node_raw(&key);
        let target = match (node.left_child.is_some(), node.right_child.clone()) {
            (true, Some(right_child)) => {
                let successor = self.extreme(right_child, Side::Left);
                self.tree.swap_values(&key, &successor);
                trace!(key = ?key, successor = ?successor, "moved successor value into removed node");
                successor
            }
            _ => key,
        };
        let (value, _) = self.tree.splice_out(&target);
        Some(value)
    }
}
impl<T, K, S> Clone for SearchTree<T, K, S>
where
    T: Clone,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}
impl<T, K, S> Default for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> Extend<T> for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
impl<T, K, S> FromIterator<T> for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
impl<T, K, S> Traversable for SearchTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        self.tree.cursor_to_root()
    }
    #[inline(always)]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        self.tree.value_of(cursor)
    }
    #[inline(always)]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.tree.parent_of(cursor)
    }
    #[inline(always)]
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.tree.left_child_of(cursor)
    }
    #[inline(always)]
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.tree.right_child_of(cursor)
    }
}

#[cfg(test)]
mod tests;
