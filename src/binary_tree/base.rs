use core::{fmt::Debug, mem, ptr};
use alloc::vec::Vec;
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{Traversable, Traverse, Visitor, Order},
    util::{trace, height_from_children},
};
use super::{Node, NodeRef, NodeRefMut, Side, InsertError, SlotOccupiedError};

/// A binary tree.
///
/// See the [module-level documentation] for more.
///
/// The storage must keep the keys of live nodes valid while other nodes are removed, which rules out list storages that shift elements, such as a plain `Vec`. Removing a node from such a storage panics.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct BinaryTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(crate) storage: S,
    pub(crate) root: Option<K>,
    pub(crate) size: usize,
}
impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty binary tree.
    ///
    /// # Example
    /// ```rust
    /// # use sapwood::BinaryTree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = BinaryTree::<u32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.size(), 0);
    /// assert!(tree.root().is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
            size: 0,
        }
    }
    /// Creates an empty binary tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            size: 0,
        }
    }
    /// Creates a binary tree consisting of a single root node with the specified value.
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.insert_as_root(value);
        tree
    }

    /// Returns the number of nodes in the tree. This is tracked as nodes are added and removed rather than counted.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the key of the root node, or `None` if the tree is empty.
    #[inline(always)]
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_ref()
    }
    /// Returns a reference to the root node of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.root.clone().map(move |key| NodeRef::new_trusted(self, key))
    }
    /// Returns a *mutable* reference to the root node of the tree, or `None` if the tree is empty.
    pub fn root_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.root.clone()?;
        Some(NodeRefMut::new_trusted(self, key))
    }
    /// Returns a reference to the node with the specified key, or `None` if the key lies outside of the storage.
    ///
    /// Keys of removed nodes are not detected here: the sparse storage keeps a hole in their place, which still counts as part of the storage. Accessing the node through the returned reference panics in that case.
    #[inline]
    pub fn get(&self, key: &K) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::new_raw(self, key.clone())
    }
    /// Returns a *mutable* reference to the node with the specified key, or `None` if the key lies outside of the storage.
    ///
    /// Like [`get`], this does not detect keys of removed nodes; accessing the node through the returned reference panics instead.
    ///
    /// [`get`]: #method.get " "
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<NodeRefMut<'_, T, K, S>> {
        NodeRefMut::new_raw(self, key.clone())
    }
    /// Returns a reference to the node with the specified key.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree.
    #[track_caller]
    pub fn node(&self, key: &K) -> NodeRef<'_, T, K, S> {
        self.get(key)
            .unwrap_or_else(|| panic!("invalid node key: {:?}", key))
    }
    /// Returns a *mutable* reference to the node with the specified key.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree.
    #[track_caller]
    pub fn node_mut(&mut self, key: &K) -> NodeRefMut<'_, T, K, S> {
        let key = key.clone();
        if !self.storage.contains_key(&key) {
            panic!("invalid node key: {:?}", key);
        }
        NodeRefMut::new_trusted(self, key)
    }

    /// Makes the specified value the root of an empty tree, returning the key of the new node.
    ///
    /// # Errors
    /// Will fail if the tree already has a root node. The value is returned back to the caller in such a case.
    pub fn try_insert_as_root(&mut self, value: T) -> Result<K, InsertError<T>> {
        if self.root.is_some() {
            return Err(InsertError::TreeNotEmpty { value });
        }
        let key = self.storage.add(Node::leaf(value, None));
        self.root = Some(key.clone());
        self.size = 1;
        trace!(key = ?key, "inserted root node");
        Ok(key)
    }
    /// Makes the specified value the root of an empty tree, returning the key of the new node.
    ///
    /// # Panics
    /// Panics if the tree already has a root node.
    #[track_caller]
    pub fn insert_as_root(&mut self, value: T) -> K {
        self.try_insert_as_root(value)
            .unwrap_or_else(|e| panic!("{}", e))
    }
    /// Adds a new leaf node with the specified value as a child of the specified node, returning the key of the new node. The heights of the ancestors are updated accordingly.
    ///
    /// # Errors
    /// Will fail if the parent already has a child at the specified side. The value is returned back to the caller in such a case.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree.
    #[track_caller]
    pub fn try_insert_as_child(
        &mut self,
        parent: &K,
        side: Side,
        value: T,
    ) -> Result<K, InsertError<T>> {
        if self.node_raw(parent).child(side).is_some() {
            return Err(InsertError::SlotOccupied { side, value });
        }
        let key = self.storage.add(Node::leaf(value, Some(parent.clone())));
        *self.node_raw_mut(parent).child_mut(side) = Some(key.clone());
        self.size += 1;
        self.update_height_above(parent);
        trace!(key = ?key, parent = ?parent, %side, "inserted child node");
        Ok(key)
    }
    /// Adds a new leaf node with the specified value as the left child of the specified node, returning the key of the new node.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree or if that node already has a left child.
    #[track_caller]
    pub fn insert_as_left_child(&mut self, parent: &K, value: T) -> K {
        self.try_insert_as_child(parent, Side::Left, value)
            .unwrap_or_else(|e| panic!("{}", e))
    }
    /// Adds a new leaf node with the specified value as the right child of the specified node, returning the key of the new node.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree or if that node already has a right child.
    #[track_caller]
    pub fn insert_as_right_child(&mut self, parent: &K, value: T) -> K {
        self.try_insert_as_child(parent, Side::Right, value)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Moves all nodes of `subtree` into this tree, hanging its root at the specified side of the specified node. The shape, values and heights inside the subtree are preserved, `subtree` is left empty and the key of `parent` is returned.
    ///
    /// The nodes get new keys in this tree; the keys they had in `subtree` are invalidated. Attaching an empty subtree does nothing.
    ///
    /// # Errors
    /// Will fail if the parent already has a child at the specified side, leaving both trees untouched.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree.
    #[track_caller]
    pub fn try_attach(
        &mut self,
        parent: &K,
        side: Side,
        subtree: &mut Self,
    ) -> Result<K, SlotOccupiedError> {
        if self.node_raw(parent).child(side).is_some() {
            return Err(SlotOccupiedError { side });
        }
        if let Some(subtree_root) = subtree.root.take() {
            let (_, moved) = Self::transplant(
                &mut subtree.storage,
                subtree_root,
                &mut self.storage,
                Some((parent.clone(), side)),
            );
            debug_assert_eq!(moved, subtree.size, "subtree size does not match its node count");
            self.size += moved;
            subtree.clear();
            self.update_height_above(parent);
            trace!(parent = ?parent, %side, moved, "attached subtree");
        }
        Ok(parent.clone())
    }
    /// Moves all nodes of `subtree` into this tree as the left subtree of the specified node. See [`try_attach`] for details.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree or if that node already has a left child.
    ///
    /// [`try_attach`]: #method.try_attach " "
    #[track_caller]
    pub fn attach_as_left_child(&mut self, parent: &K, subtree: &mut Self) -> K {
        self.try_attach(parent, Side::Left, subtree)
            .unwrap_or_else(|e| panic!("{}", e))
    }
    /// Moves all nodes of `subtree` into this tree as the right subtree of the specified node. See [`try_attach`] for details.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree or if that node already has a right child.
    ///
    /// [`try_attach`]: #method.try_attach " "
    #[track_caller]
    pub fn attach_as_right_child(&mut self, parent: &K, subtree: &mut Self) -> K {
        self.try_attach(parent, Side::Right, subtree)
            .unwrap_or_else(|e| panic!("{}", e))
    }

    /// Removes the subtree rooted at the specified node, dropping all of its values, and returns how many nodes were removed. Removing the root clears the whole tree.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree.
    #[track_caller]
    pub fn remove_subtree(&mut self, key: &K) -> usize {
        let (parent, side) = match self.slot_of(key) {
            Some(slot) => slot,
            None => {
                assert!(
                    self.root.as_ref() == Some(key),
                    "node {:?} has no parent but is not the root", key,
                );
                let removed = self.size;
                self.clear();
                return removed;
            }
        };
        *self.node_raw_mut(&parent).child_mut(side) = None;
        let mut removed = 0;
        let mut stack = Vec::new();
        stack.push(key.clone());
        while let Some(current) = stack.pop() {
            let node = self.storage.remove(&current);
            removed += 1;
            stack.extend(node.left_child);
            stack.extend(node.right_child);
        }
        self.size -= removed;
        self.update_height_above(&parent);
        trace!(key = ?key, parent = ?parent, removed, "removed subtree");
        removed
    }
    /// Detaches the subtree rooted at the specified node and returns it as a standalone tree, updating the size and heights of this one. The seceded nodes get new keys in the returned tree.
    ///
    /// Returns `None` without doing anything if the node is the root of this tree, since there is nothing to secede it from.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree.
    #[track_caller]
    pub fn secede_subtree(&mut self, key: &K) -> Option<Self> {
        let (parent, side) = self.slot_of(key)?;
        *self.node_raw_mut(&parent).child_mut(side) = None;
        let mut seceded = Self::new();
        let (root, moved) = Self::transplant(
            &mut self.storage,
            key.clone(),
            &mut seceded.storage,
            None,
        );
        seceded.root = Some(root);
        seceded.size = moved;
        self.size -= moved;
        self.update_height_above(&parent);
        trace!(key = ?key, parent = ?parent, moved, "seceded subtree");
        Some(seceded)
    }
    /// Removes all nodes from the tree.
    pub fn clear(&mut self) {
        self.storage = S::new();
        self.root = None;
        self.size = 0;
    }

    /// Recomputes the height of the specified node from the heights of its children and returns it.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree.
    #[track_caller]
    pub fn update_height(&mut self, key: &K) -> i32 {
        let node = self.node_raw(key);
        let height = height_from_children(
            node.left_child.as_ref().map(|x| self.node_raw(x).height),
            node.right_child.as_ref().map(|x| self.node_raw(x).height),
        );
        self.node_raw_mut(key).height = height;
        height
    }
    /// Recomputes the heights of the specified node and its ancestors, going up until the root is reached or a node turns out to keep its previous height, in which case the heights of its ancestors cannot have changed either.
    ///
    /// # Panics
    /// Panics if the key does not belong to a node of the tree.
    #[track_caller]
    pub fn update_height_above(&mut self, key: &K) {
        let mut current = Some(key.clone());
        while let Some(key) = current {
            let previous_height = self.node_raw(&key).height;
            if self.update_height(&key) == previous_height {
                break;
            }
            current = self.node_raw(&key).parent.clone();
        }
    }
    /// Exchanges the values of two nodes, leaving the structure of the tree as it was.
    ///
    /// # Panics
    /// Panics if either key does not belong to a node of the tree.
    #[track_caller]
    pub fn swap_values(&mut self, a: &K, b: &K) {
        // Both keys are checked before anything is moved, so that no panic can happen in between.
        self.node_raw(a);
        self.node_raw(b);
        if a == b {
            return;
        }
        let a_value = unsafe {
            // SAFETY: the slot is overwritten below without dropping its contents, so the value
            // is never duplicated. Nothing until that write can panic: both keys were validated
            // above and `a != b`, so the `node_raw_mut` lookups succeed and `mem::replace` does
            // not run any user code. An unwind can therefore never drop the value twice.
            ptr::read(&self.node_raw(a).value)
        };
        let b_value = mem::replace(&mut self.node_raw_mut(b).value, a_value);
        unsafe {
            // SAFETY: the previous contents were moved out above and nothing has touched the
            // slot since
            ptr::write(&mut self.node_raw_mut(a).value, b_value);
        }
    }

    /// Visits every node in the specified order. Returns `false` if the visitor stopped the traversal early, `true` otherwise.
    #[inline(always)]
    pub fn traverse<V: Visitor<T>>(&self, order: Order, visitor: V) -> bool {
        Traversable::traverse(self, order, visitor)
    }
    /// Visits every node in pre-order: node, left subtree, right subtree.
    #[inline(always)]
    pub fn traverse_pre_order(&self, visitor: impl FnMut(&T)) {
        self.traverse(Order::PreOrder, visitor);
    }
    /// Visits every node in in-order: left subtree, node, right subtree.
    #[inline(always)]
    pub fn traverse_in_order(&self, visitor: impl FnMut(&T)) {
        self.traverse(Order::InOrder, visitor);
    }
    /// Visits every node in post-order: left subtree, right subtree, node.
    #[inline(always)]
    pub fn traverse_post_order(&self, visitor: impl FnMut(&T)) {
        self.traverse(Order::PostOrder, visitor);
    }
    /// Visits every node level by level, left to right within each level.
    #[inline(always)]
    pub fn traverse_level_order(&self, visitor: impl FnMut(&T)) {
        self.traverse(Order::LevelOrder, visitor);
    }
    /// Returns an iterator over the keys of all nodes in the specified order.
    #[inline(always)]
    pub fn keys(&self, order: Order) -> Traverse<'_, Self> {
        Traversable::cursors(self, order)
    }
    /// Returns an iterator over the values of all nodes in the specified order.
    #[inline]
    pub fn values(&self, order: Order) -> impl Iterator<Item = &T> + '_ {
        self.keys(order).map(move |key| &self.node_raw(&key).value)
    }

    #[inline]
    #[track_caller]
    pub(crate) fn node_raw(&self, key: &K) -> &Node<T, K> {
        self.storage
            .get(key)
            .unwrap_or_else(|| panic!("invalid node key: {:?}", key))
    }
    #[inline]
    #[track_caller]
    pub(crate) fn node_raw_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid node key: {:?}", key))
    }
    /// Returns the parent of the node and the side of the parent the node hangs at, or `None` for the root.
    #[track_caller]
    pub(crate) fn slot_of(&self, key: &K) -> Option<(K, Side)> {
        let parent = self.node_raw(key).parent.clone()?;
        let side = if self.node_raw(&parent).left_child.as_ref() == Some(key) {
            Side::Left
        } else {
            debug_assert!(
                self.node_raw(&parent).right_child.as_ref() == Some(key),
                "parent's children don't match the key",
            );
            Side::Right
        };
        Some((parent, side))
    }
    /// Removes a node which has at most one child, putting that child (if any) in its place, and returns the value of the removed node along with the key of its former parent. Size and heights are updated.
    #[track_caller]
    pub(crate) fn splice_out(&mut self, key: &K) -> (T, Option<K>) {
        let node = self.node_raw(key);
        debug_assert!(
            node.left_child.is_none() || node.right_child.is_none(),
            "only nodes with at most one child can be spliced out",
        );
        let heir = node.left_child.clone().or_else(|| node.right_child.clone());
        let parent = match self.slot_of(key) {
            Some((parent, side)) => {
                *self.node_raw_mut(&parent).child_mut(side) = heir.clone();
                Some(parent)
            }
            None => {
                self.root = heir.clone();
                None
            }
        };
        if let Some(heir) = &heir {
            self.node_raw_mut(heir).parent = parent.clone();
        }
        let removed = self.storage.remove(key);
        self.size -= 1;
        if let Some(parent) = &parent {
            self.update_height_above(parent);
        }
        trace!(key = ?key, parent = ?parent, "spliced out node");
        (removed.value, parent)
    }
    /// Moves the subtree rooted at `root` from one storage into another, optionally linking it under a node of the target storage. Returns the new key of the subtree root and the number of nodes moved.
    fn transplant(
        source: &mut S,
        root: K,
        target: &mut S,
        anchor: Option<(K, Side)>,
    ) -> (K, usize) {
        let mut moved = 0;
        let mut pending = Vec::new();
        let mut move_one = |old_key: K, anchor: Option<(K, Side)>, pending: &mut Vec<_>| {
            let mut node = source.remove(&old_key);
            let left_child = node.left_child.take();
            let right_child = node.right_child.take();
            node.parent = anchor.as_ref().map(|(parent, _)| parent.clone());
            let new_key = target.add(node);
            if let Some((parent, side)) = anchor {
                *target
                    .get_mut(&parent)
                    .unwrap_or_else(|| panic!("invalid node key: {:?}", parent))
                    .child_mut(side) = Some(new_key.clone());
            }
            if let Some(right_child) = right_child {
                pending.push((right_child, Some((new_key.clone(), Side::Right))));
            }
            if let Some(left_child) = left_child {
                pending.push((left_child, Some((new_key.clone(), Side::Left))));
            }
            moved += 1;
            new_key
        };
        let new_root = move_one(root, anchor, &mut pending);
        while let Some((old_key, anchor)) = pending.pop() {
            move_one(old_key, anchor, &mut pending);
        }
        (new_root, moved)
    }
}
impl<T, K, S> Default for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> Clone for BinaryTree<T, K, S>
where
    T: Clone,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Builds a fresh storage holding copies of all the nodes. The keys of the copy may differ from the ones of the original tree.
    fn clone(&self) -> Self {
        let mut storage = S::with_capacity(self.size);
        let root = self.root.as_ref().map(|root| {
            let mut pending = Vec::new();
            let mut copy_one = |old_key: &K, anchor: Option<(K, Side)>, pending: &mut Vec<_>| {
                let old = self.node_raw(old_key);
                let mut node = Node::leaf(old.value.clone(), anchor.as_ref().map(|(parent, _)| parent.clone()));
                node.height = old.height;
                let new_key = storage.add(node);
                if let Some((parent, side)) = anchor {
                    *storage
                        .get_mut(&parent)
                        .unwrap_or_else(|| panic!("invalid node key: {:?}", parent))
                        .child_mut(side) = Some(new_key.clone());
                }
                if let Some(right_child) = &old.right_child {
                    pending.push((right_child.clone(), Some((new_key.clone(), Side::Right))));
                }
                if let Some(left_child) = &old.left_child {
                    pending.push((left_child.clone(), Some((new_key.clone(), Side::Left))));
                }
                new_key
            };
            let new_root = copy_one(root, None, &mut pending);
            while let Some((old_key, anchor)) = pending.pop() {
                copy_one(&old_key, anchor, &mut pending);
            }
            new_root
        });
        Self {
            storage,
            root,
            size: self.size,
        }
    }
}
