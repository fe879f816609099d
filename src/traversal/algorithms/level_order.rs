use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug},
};
use crate::{traversal::Traversable, queue::Queue};

/// A level-order (breadth-first) iterator over the cursors of a subtree.
pub struct LevelOrder<'a, T: Traversable> {
    traversable: &'a T,
    queue: Queue<T::Cursor>,
}
impl<'a, T: Traversable> LevelOrder<'a, T> {
    /// Creates an iterator over the subtree rooted at `start`, or an empty one if `start` is `None`.
    pub fn new(traversable: &'a T, start: Option<T::Cursor>) -> Self {
        Self {
            traversable,
            queue: start.into_iter().collect(),
        }
    }
}
impl<T: Traversable> Iterator for LevelOrder<'_, T> {
    type Item = T::Cursor;
    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.queue.dequeue()?;
        if let Some(left_child) = self.traversable.left_child_of(&cursor) {
            self.queue.enqueue(left_child);
        }
        if let Some(right_child) = self.traversable.right_child_of(&cursor) {
            self.queue.enqueue(right_child);
        }
        Some(cursor)
    }
}
impl<T: Traversable> FusedIterator for LevelOrder<'_, T> {}
impl<T: Traversable> Debug for LevelOrder<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelOrder")
            .field("queue", &self.queue)
            .finish()
    }
}
