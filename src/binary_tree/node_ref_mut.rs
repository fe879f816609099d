use core::fmt::{self, Formatter, Debug};
use crate::storage::{Storage, DefaultStorage};
use super::{BinaryTree, InsertError, Node, NodeRef, Side, SlotOccupiedError};

/// A *mutable* reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree and modify it as a whole. All structural edits made through it keep the size of the tree and the heights of the nodes up to date.
pub struct NodeRefMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut BinaryTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if the key lies outside of the storage.
    ///
    /// The key of a removed node is not detected: its hole still lies inside the storage, and the first access through the returned reference panics.
    pub fn new_raw(tree: &'a mut BinaryTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(Self::new_trusted(tree, key))
        } else {
            None
        }
    }
    #[inline(always)]
    pub(crate) fn new_trusted(tree: &'a mut BinaryTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference to the raw storage key for the node.
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
    /// Returns a shared reference to the node, which offers all of the read-only navigation.
    #[inline(always)]
    pub fn as_node_ref(&self) -> NodeRef<'_, T, K, S> {
        NodeRef::new_trusted(self.tree, self.key.clone())
    }

    /// Returns a reference to the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.tree.node_raw(&self.key).value
    }
    /// Returns a *mutable* reference to the value stored in the node.
    ///
    /// Changing the value of a node which belongs to a search tree in a way which affects ordering is a logic error.
    #[inline(always)]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.tree.node_raw_mut(&self.key).value
    }
    /// Consumes the reference and returns a *mutable* reference to the value which lives as long as the borrow of the tree.
    #[inline]
    pub fn into_value_mut(self) -> &'a mut T {
        let Self { tree, key } = self;
        &mut tree.node_raw_mut(&key).value
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.as_node_ref().parent()
    }
    /// Returns a *mutable* reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.tree.node_raw(&self.key).parent.clone()?;
        Some(NodeRefMut::new_trusted(self.tree, key))
    }
    /// Consumes the reference and returns a *mutable* reference to the parent node, or `None` if it's the root node.
    #[inline]
    pub fn into_parent(self) -> Option<Self> {
        let key = self.tree.node_raw(&self.key).parent.clone()?;
        Some(Self::new_trusted(self.tree, key))
    }
    /// Returns a reference to the left child, or `None` if the node has none.
    #[inline]
    pub fn left_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.as_node_ref().left_child()
    }
    /// Returns a *mutable* reference to the left child, or `None` if the node has none.
    #[inline]
    pub fn left_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        self.child_mut(Side::Left)
    }
    /// Returns a reference to the right child, or `None` if the node has none.
    #[inline]
    pub fn right_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.as_node_ref().right_child()
    }
    /// Returns a *mutable* reference to the right child, or `None` if the node has none.
    #[inline]
    pub fn right_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        self.child_mut(Side::Right)
    }
    /// Returns a *mutable* reference to the child at the specified side, or `None` if the node has none there.
    pub fn child_mut(&mut self, side: Side) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.tree.node_raw(&self.key).child(side).cloned()?;
        Some(NodeRefMut::new_trusted(self.tree, key))
    }
    /// Returns the cached height of the node.
    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.tree.node_raw(&self.key).height
    }

    /// Adds a new leaf node with the specified value at the specified side of this node, returning the key of the new node.
    ///
    /// # Errors
    /// Will fail if the node already has a child there. The value is returned back to the caller in such a case.
    #[inline]
    pub fn try_insert_as_child(&mut self, side: Side, value: T) -> Result<K, InsertError<T>> {
        self.tree.try_insert_as_child(&self.key, side, value)
    }
    /// Adds a new leaf node with the specified value as the left child of this node, returning the key of the new node.
    ///
    /// # Panics
    /// Panics if the node already has a left child.
    #[inline]
    #[track_caller]
    pub fn insert_as_left_child(&mut self, value: T) -> K {
        self.tree.insert_as_left_child(&self.key, value)
    }
    /// Adds a new leaf node with the specified value as the right child of this node, returning the key of the new node.
    ///
    /// # Panics
    /// Panics if the node already has a right child.
    #[inline]
    #[track_caller]
    pub fn insert_as_right_child(&mut self, value: T) -> K {
        self.tree.insert_as_right_child(&self.key, value)
    }
    /// Moves all nodes of `subtree` into the tree at the specified side of this node, leaving `subtree` empty.
    ///
    /// # Errors
    /// Will fail if the node already has a child there, leaving both trees untouched.
    #[inline]
    pub fn try_attach(&mut self, side: Side, subtree: &mut BinaryTree<T, K, S>) -> Result<(), SlotOccupiedError> {
        self.tree.try_attach(&self.key, side, subtree).map(|_| ())
    }
    /// Moves all nodes of `subtree` into the tree as the left subtree of this node, leaving `subtree` empty.
    ///
    /// # Panics
    /// Panics if the node already has a left child.
    #[inline]
    #[track_caller]
    pub fn attach_as_left_child(&mut self, subtree: &mut BinaryTree<T, K, S>) {
        self.tree.attach_as_left_child(&self.key, subtree);
    }
    /// Moves all nodes of `subtree` into the tree as the right subtree of this node, leaving `subtree` empty.
    ///
    /// # Panics
    /// Panics if the node already has a right child.
    #[inline]
    #[track_caller]
    pub fn attach_as_right_child(&mut self, subtree: &mut BinaryTree<T, K, S>) {
        self.tree.attach_as_right_child(&self.key, subtree);
    }
    /// Removes the node together with all of its descendants, returning how many nodes were removed.
    #[inline]
    pub fn remove_subtree(self) -> usize {
        self.tree.remove_subtree(&self.key)
    }
    /// Detaches the subtree rooted at this node into a standalone tree. Returns `None` without doing anything if the node is the root.
    #[inline]
    pub fn secede(self) -> Option<BinaryTree<T, K, S>> {
        self.tree.secede_subtree(&self.key)
    }
}

impl<'a, T, K, S> From<NodeRefMut<'a, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn from(op: NodeRefMut<'a, T, K, S>) -> Self {
        NodeRef::new_trusted(op.tree, op.key)
    }
}
impl<'a, T, K, S> From<&'a NodeRefMut<'_, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn from(op: &'a NodeRefMut<'_, T, K, S>) -> Self {
        op.as_node_ref()
    }
}
impl<T, K, S> Debug for NodeRefMut<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRefMut")
            .field("key", &self.key)
            .field("value", self.value())
            .field("height", &self.height())
            .finish()
    }
}
