use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug},
};
use alloc::vec::Vec;
use crate::traversal::Traversable;

/// A pre-order iterator over the cursors of a subtree.
pub struct PreOrder<'a, T: Traversable> {
    traversable: &'a T,
    stack: Vec<T::Cursor>,
}
impl<'a, T: Traversable> PreOrder<'a, T> {
    /// Creates an iterator over the subtree rooted at `start`, or an empty one if `start` is `None`.
    pub fn new(traversable: &'a T, start: Option<T::Cursor>) -> Self {
        Self {
            traversable,
            stack: start.into_iter().collect(),
        }
    }
}
impl<T: Traversable> Iterator for PreOrder<'_, T> {
    type Item = T::Cursor;
    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.stack.pop()?;
        // Right goes first so that the left subtree is popped off before it
        if let Some(right_child) = self.traversable.right_child_of(&cursor) {
            self.stack.push(right_child);
        }
        if let Some(left_child) = self.traversable.left_child_of(&cursor) {
            self.stack.push(left_child);
        }
        Some(cursor)
    }
}
impl<T: Traversable> FusedIterator for PreOrder<'_, T> {}

/// An in-order iterator over the cursors of a subtree.
pub struct InOrder<'a, T: Traversable> {
    traversable: &'a T,
    stack: Vec<T::Cursor>,
    descend_from: Option<T::Cursor>,
}
impl<'a, T: Traversable> InOrder<'a, T> {
    /// Creates an iterator over the subtree rooted at `start`, or an empty one if `start` is `None`.
    pub fn new(traversable: &'a T, start: Option<T::Cursor>) -> Self {
        Self {
            traversable,
            stack: Vec::new(),
            descend_from: start,
        }
    }
}
impl<T: Traversable> Iterator for InOrder<'_, T> {
    type Item = T::Cursor;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cursor) = self.descend_from.take() {
            self.descend_from = self.traversable.left_child_of(&cursor);
            self.stack.push(cursor);
        }
        let cursor = self.stack.pop()?;
        self.descend_from = self.traversable.right_child_of(&cursor);
        Some(cursor)
    }
}
impl<T: Traversable> FusedIterator for InOrder<'_, T> {}

/// A post-order iterator over the cursors of a subtree.
pub struct PostOrder<'a, T: Traversable> {
    traversable: &'a T,
    /// The flag is set once the children of the node have been pushed.
    stack: Vec<(T::Cursor, bool)>,
}
impl<'a, T: Traversable> PostOrder<'a, T> {
    /// Creates an iterator over the subtree rooted at `start`, or an empty one if `start` is `None`.
    pub fn new(traversable: &'a T, start: Option<T::Cursor>) -> Self {
        Self {
            traversable,
            stack: start.into_iter().map(|x| (x, false)).collect(),
        }
    }
}
impl<T: Traversable> Iterator for PostOrder<'_, T> {
    type Item = T::Cursor;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (cursor, expanded) = self.stack.pop()?;
            if expanded {
                return Some(cursor);
            }
            let right_child = self.traversable.right_child_of(&cursor);
            let left_child = self.traversable.left_child_of(&cursor);
            self.stack.push((cursor, true));
            if let Some(right_child) = right_child {
                self.stack.push((right_child, false));
            }
            if let Some(left_child) = left_child {
                self.stack.push((left_child, false));
            }
        }
    }
}
impl<T: Traversable> FusedIterator for PostOrder<'_, T> {}

macro_rules! impl_debug {
    ($($name:ident),+) => {$(
        impl<T: Traversable> Debug for $name<'_, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("stack", &self.stack)
                    .finish()
            }
        }
    )+};
}
impl_debug!(PreOrder, InOrder, PostOrder);
