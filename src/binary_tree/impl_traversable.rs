use core::fmt::Debug;
use crate::{storage::Storage, traversal::Traversable};
use super::{BinaryTree, Node};

impl<T, K, S> Traversable for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        self.root.clone()
    }
    #[track_caller]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        &self.node_raw(cursor).value
    }
    #[track_caller]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_raw(cursor).parent.clone()
    }
    #[track_caller]
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_raw(cursor).left_child.clone()
    }
    #[track_caller]
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_raw(cursor).right_child.clone()
    }
}
