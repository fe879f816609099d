use core::fmt::{self, Formatter, Debug};
use arrayvec::ArrayVec;
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{Traversable, Traverse, Visitor, Order},
};
use super::{BinaryTree, Node, Side};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
pub struct NodeRef<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a BinaryTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if the key lies outside of the storage.
    ///
    /// The key of a removed node is not detected: its hole still lies inside the storage, and the first access through the returned reference panics.
    #[inline]
    pub fn new_raw(tree: &'a BinaryTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(Self::new_trusted(tree, key))
        } else {
            None
        }
    }
    /// Creates a `NodeRef` for a key which is already known to be present.
    #[inline(always)]
    pub(crate) fn new_trusted(tree: &'a BinaryTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns a clone of the raw storage key for the node.
    #[inline(always)]
    pub fn key(&self) -> K {
        self.key.clone()
    }
    /// Returns the tree the node belongs to.
    #[inline(always)]
    pub fn tree(&self) -> &'a BinaryTree<T, K, S> {
        self.tree
    }

    /// Returns a reference to the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node().parent.as_ref())
    }
    /// Returns a reference to the left child, or `None` if the node has none.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.link(self.node().left_child.as_ref())
    }
    /// Returns a reference to the right child, or `None` if the node has none.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.link(self.node().right_child.as_ref())
    }
    /// Returns a reference to the child at the specified side, or `None` if the node has none there.
    #[inline]
    pub fn child(&self, side: Side) -> Option<Self> {
        self.link(self.node().child(side))
    }
    /// Returns references to the children which are present, left one first.
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        self.left_child()
            .into_iter()
            .chain(self.right_child())
            .collect()
    }

    /// Returns the cached height of the node: the number of edges on the longest downward path from it to a leaf.
    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.node().height
    }
    /// Counts the nodes in the subtree rooted at this node, including the node itself. Takes time proportional to the size of the subtree.
    pub fn size(&self) -> usize {
        self.keys(Order::PreOrder).count()
    }
    /// Returns the difference between the heights of the left and right subtrees.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        height_of(self.left_child()) - height_of(self.right_child())
    }
    /// Returns `true` if both subtrees have the same height, `false` otherwise.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.balance_factor() == 0
    }
    /// Returns `true` if the heights of the subtrees differ by at most one, `false` otherwise.
    #[inline]
    pub fn is_avl_balanced(&self) -> bool {
        self.balance_factor().abs() < 2
    }

    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is the left child of its parent, `false` otherwise.
    #[inline]
    pub fn is_left_child(&self) -> bool {
        matches!(self.slot(), Some((_, Side::Left)))
    }
    /// Returns `true` if the node is the right child of its parent, `false` otherwise.
    #[inline]
    pub fn is_right_child(&self) -> bool {
        matches!(self.slot(), Some((_, Side::Right)))
    }
    /// Returns `true` if the node has a parent, `false` otherwise.
    #[inline(always)]
    pub fn has_parent(&self) -> bool {
        !self.is_root()
    }
    /// Returns `true` if the node has a left child, `false` otherwise.
    #[inline(always)]
    pub fn has_left_child(&self) -> bool {
        self.node().left_child.is_some()
    }
    /// Returns `true` if the node has a right child, `false` otherwise.
    #[inline(always)]
    pub fn has_right_child(&self) -> bool {
        self.node().right_child.is_some()
    }
    /// Returns `true` if the node has at least one child, `false` otherwise.
    #[inline(always)]
    pub fn has_child(&self) -> bool {
        self.has_left_child() || self.has_right_child()
    }
    /// Returns `true` if the node has both children, `false` otherwise.
    #[inline(always)]
    pub fn has_both_children(&self) -> bool {
        self.has_left_child() && self.has_right_child()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        !self.has_child()
    }

    /// Returns the parent of the node along with the side of the parent the node hangs at, or `None` if it's the root node.
    #[inline]
    pub fn slot(&self) -> Option<(Self, Side)> {
        self.tree
            .slot_of(&self.key)
            .map(|(parent, side)| (Self::new_trusted(self.tree, parent), side))
    }
    /// Returns the other child of the parent, or `None` if the node is the root or an only child.
    pub fn sibling(&self) -> Option<Self> {
        let (parent, side) = self.slot()?;
        parent.child(side.opposite())
    }
    /// Returns the sibling of the parent, or `None` if there is no such node.
    pub fn uncle(&self) -> Option<Self> {
        self.parent()?.sibling()
    }
    /// Returns the node which comes right before this one in in-order, or `None` if this is the first one.
    pub fn predecessor(&self) -> Option<Self> {
        self.neighbor(Side::Left)
    }
    /// Returns the node which comes right after this one in in-order, or `None` if this is the last one.
    pub fn successor(&self) -> Option<Self> {
        self.neighbor(Side::Right)
    }

    /// Visits the subtree rooted at this node in the specified order. Returns `false` if the visitor stopped the traversal early, `true` otherwise.
    #[inline]
    pub fn traverse<V: Visitor<T>>(&self, order: Order, visitor: V) -> bool {
        self.tree.traverse_from(Some(self.key.clone()), order, visitor)
    }
    /// Returns an iterator over the keys of the subtree rooted at this node in the specified order.
    #[inline]
    pub fn keys(&self, order: Order) -> Traverse<'a, BinaryTree<T, K, S>> {
        Traverse::new(self.tree, Some(self.key.clone()), order)
    }
    /// Returns an iterator over the values of the subtree rooted at this node in the specified order.
    pub fn values(&self, order: Order) -> impl Iterator<Item = &'a T> + 'a
    where T: 'a, K: 'a, S: 'a,
    {
        let tree = self.tree;
        self.keys(order).map(move |key| &tree.node_raw(&key).value)
    }

    /// In-order neighbor towards the specified side: the extreme node of the subtree on that side if there is one, otherwise the closest ancestor for which this node lies on the opposite side.
    fn neighbor(&self, side: Side) -> Option<Self> {
        if let Some(mut current) = self.child(side) {
            while let Some(next) = current.child(side.opposite()) {
                current = next;
            }
            return Some(current);
        }
        let mut current = self.clone();
        loop {
            let (parent, parent_side) = current.slot()?;
            if parent_side == side.opposite() {
                return Some(parent);
            }
            current = parent;
        }
    }
    #[inline]
    fn link(&self, key: Option<&K>) -> Option<Self> {
        key.map(|x| Self::new_trusted(self.tree, x.clone()))
    }
    #[inline(always)]
    #[track_caller]
    fn node(&self) -> &'a Node<T, K> {
        self.tree.node_raw(&self.key)
    }
}

/// Returns the height of the node, or `-1` for an absent one.
///
/// # Example
/// ```rust
/// # use sapwood::binary_tree::{BinaryTree, height_of};
/// let tree = BinaryTree::<_>::with_root(1);
/// assert_eq!(height_of(tree.root()), 0);
/// assert_eq!(height_of(tree.root().and_then(|x| x.left_child())), -1);
/// ```
#[inline]
pub fn height_of<T, K, S>(node: Option<NodeRef<'_, T, K, S>>) -> i32
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    node.map_or(-1, |x| x.height())
}

impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::new_trusted(self.tree, self.key.clone())
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, K, S> PartialEq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Two references are equal if they point to the same node of the same tree.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.key == other.key
    }
}
impl<T, K, S> Eq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Debug for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.key)
            .field("value", self.value())
            .field("height", &self.height())
            .finish()
    }
}
