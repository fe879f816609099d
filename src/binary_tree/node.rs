use core::{num::NonZeroIsize, fmt::Debug};
use granite::{ListStorage, MoveFix};
use super::Side;

pub(crate) const SHIFTING_STORAGE_PANIC_MSG: &str =
    "binary trees need storages which keep keys stable, list storages which shift elements are not supported";

/// A node of a binary tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K>
where K: Clone + Debug + Eq,
{
    pub(crate) value: T,
    pub(crate) parent: Option<K>,
    pub(crate) left_child: Option<K>,
    pub(crate) right_child: Option<K>,
    pub(crate) height: i32,
}
impl<T, K> Node<T, K>
where K: Clone + Debug + Eq,
{
    /// Creates a childless node.
    #[inline(always)]
    pub(crate) const fn leaf(value: T, parent: Option<K>) -> Self {
        Self {
            value,
            parent,
            left_child: None,
            right_child: None,
            height: 0,
        }
    }
    #[inline(always)]
    pub(crate) fn child(&self, side: Side) -> Option<&K> {
        match side {
            Side::Left => self.left_child.as_ref(),
            Side::Right => self.right_child.as_ref(),
        }
    }
    #[inline(always)]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<K> {
        match side {
            Side::Left => &mut self.left_child,
            Side::Right => &mut self.right_child,
        }
    }
}
/// Lets sparse list storages hold nodes.
///
/// Shifting elements would invalidate the keys the tree keeps outside of its nodes, so storages which do that are rejected with a panic as soon as they shift.
impl<T> MoveFix for Node<T, usize> {
    unsafe fn fix_shift<S>(_storage: &mut S, shifted_from: usize, shifted_by: NonZeroIsize)
    where S: ListStorage<Element = Self>,
    {
        panic!(
            "{} (elements from index {} were shifted by {})",
            SHIFTING_STORAGE_PANIC_MSG, shifted_from, shifted_by,
        );
    }

    unsafe fn fix_move<S>(storage: &mut S, previous_index: usize, current_index: usize)
    where S: ListStorage<Element = Self>,
    {
        // SAFETY: index validity is guaranteed for `current_index`.
        let node = storage.get_unchecked(current_index);
        let (parent, left_child, right_child) = (node.parent, node.left_child, node.right_child);
        if let Some(parent_index) = parent {
            let parent = storage.get_unchecked_mut(parent_index);
            if parent.left_child == Some(previous_index) {
                parent.left_child = Some(current_index);
            } else if parent.right_child == Some(previous_index) {
                parent.right_child = Some(current_index);
            } else {
                unreachable!("parent's children don't match the old index");
            }
        }
        for child_index in left_child.iter().chain(right_child.iter()) {
            storage.get_unchecked_mut(*child_index).parent = Some(current_index);
        }
    }
}
