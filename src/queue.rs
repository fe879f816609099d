//! A first-in-first-out queue.
//!
//! This is the queue used by level-order traversal to remember which nodes are yet to be visited. It's exposed publicly since it's useful on its own when writing breadth-first algorithms over the trees.

use core::iter::FromIterator;
use alloc::collections::VecDeque;

/// A first-in-first-out queue.
///
/// # Example
/// ```rust
/// use sapwood::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("Ferris");
/// queue.enqueue("Corro");
///
/// assert_eq!(queue.front(), Some(&"Ferris"));
/// assert_eq!(queue.dequeue(), Some("Ferris"));
/// assert_eq!(queue.dequeue(), Some("Corro"));
/// assert_eq!(queue.dequeue(), None);
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    list: VecDeque<T>,
}
impl<T> Queue<T> {
    /// Creates an empty queue. Does not allocate memory.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            list: VecDeque::new(),
        }
    }
    /// Creates an empty queue with space for at least `capacity` elements.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: VecDeque::with_capacity(capacity),
        }
    }
    /// Adds an element to the back of the queue.
    #[inline(always)]
    pub fn enqueue(&mut self, element: T) {
        self.list.push_back(element);
    }
    /// Removes the element at the front of the queue and returns it, or `None` if the queue is empty.
    #[inline(always)]
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }
    /// Returns a reference to the element at the front of the queue, i.e. the one which will be returned by the next call to `dequeue`, or `None` if the queue is empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }
    /// Returns `true` if the queue contains no elements, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
    /// Returns the number of elements in the queue.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.list.len()
    }
}
impl<T> FromIterator<T> for Queue<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}
impl<T> Extend<T> for Queue<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}
