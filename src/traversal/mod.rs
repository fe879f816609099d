//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Visitor`], the *trait for the callbacks invoked on every visited node*, implemented for all `FnMut(&T)` closures
//! - [`Traversable`], the *trait for binary tree-like structures* which can be walked in any of the four classic [`Order`]s
//! - The four traversal algorithms themselves (see the [`algorithms`] module), written iteratively so that degenerate trees with near-linear height cannot overflow the call stack
//! - [`Traverse`], an iterator over the cursors of a traversable in a chosen order
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Visitor`]: trait.Visitor.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`Order`]: enum.Order.html " "
//! [`Traverse`]: struct.Traverse.html " "

pub mod algorithms;

use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug},
    marker::PhantomData,
};
use algorithms::{PreOrder, InOrder, PostOrder, LevelOrder};

/// Callbacks invoked with the value of every node visited during a traversal.
///
/// Every `FnMut(&T)` closure is a visitor which never stops the traversal early. Visitors which need to stop once they found what they were looking for can either implement this trait directly or wrap a closure returning `bool` into [`VisitWhile`].
///
/// [`VisitWhile`]: struct.VisitWhile.html " "
pub trait Visitor<T: ?Sized> {
    /// Visits the value of a node, returning whether the traversal should go on.
    fn visit(&mut self, value: &T) -> VisitorDirection;
}
impl<T: ?Sized, F: FnMut(&T)> Visitor<T> for F {
    #[inline(always)]
    fn visit(&mut self, value: &T) -> VisitorDirection {
        self(value);
        VisitorDirection::Continue
    }
}

/// What a visitor wishes to happen after visiting a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitorDirection {
    /// Keep going to the next node in the traversal order.
    Continue,
    /// End the traversal right away.
    Stop,
}

/// A visitor which keeps visiting nodes for as long as the wrapped closure returns `true`.
///
/// # Example
/// ```rust
/// use sapwood::{SearchTree, traversal::{Order, VisitWhile}};
///
/// let tree: SearchTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
/// let mut small = Vec::new();
/// let finished = tree.traverse(Order::InOrder, VisitWhile::new(|x: &i32| {
///     if *x < 5 {
///         small.push(*x);
///         true
///     } else {
///         false
///     }
/// }));
/// assert!(!finished);
/// assert_eq!(small, [1, 3, 4]);
/// ```
pub struct VisitWhile<F, T: ?Sized> {
    f: F,
    _phantom: PhantomData<fn(&T)>,
}
impl<F, T> VisitWhile<F, T>
where
    F: FnMut(&T) -> bool,
    T: ?Sized,
{
    /// Wraps the specified closure into a visitor.
    #[inline(always)]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
    /// Unwraps the closure.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_inner(self) -> F {
        self.f
    }
}
impl<F, T> Visitor<T> for VisitWhile<F, T>
where
    F: FnMut(&T) -> bool,
    T: ?Sized,
{
    #[inline]
    fn visit(&mut self, value: &T) -> VisitorDirection {
        if (self.f)(value) {
            VisitorDirection::Continue
        } else {
            VisitorDirection::Stop
        }
    }
}
impl<F, T: ?Sized> Debug for VisitWhile<F, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitWhile").finish()
    }
}

/// The four orders in which the nodes of a binary tree can be visited.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Depth-first: the node itself, then its left subtree, then its right subtree.
    PreOrder,
    /// Depth-first: the left subtree, then the node itself, then the right subtree. For search trees, this visits the values in sorted order.
    InOrder,
    /// Depth-first: the left subtree, then the right subtree, then the node itself.
    PostOrder,
    /// Breadth-first: the nodes are visited level by level, left to right within each level.
    LevelOrder,
}

/// Binary tree-like data structures which can be traversed.
///
/// A traversable exposes its shape through *cursors*: cheaply clonable identifiers of nodes which can be asked for their value, parent and children.
pub trait Traversable: Sized {
    /// The payload of the nodes.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`.
    type Cursor: Clone + Debug + Eq;

    /// Returns the cursor pointing to the root node, or `None` if the traversable is empty.
    fn cursor_to_root(&self) -> Option<Self::Cursor>;
    /// Returns a reference to the value of the node at the specified cursor.
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value;
    /// Returns a cursor to the parent of the node at the specified cursor, or `None` if that node is the root node.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the left child of the node at the specified cursor, or `None` if there is none.
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the right child of the node at the specified cursor, or `None` if there is none.
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;

    /// Visits every node in the specified order, starting from the root.
    ///
    /// Returns `true` if the traversal ran to completion and `false` if the visitor stopped it early. Traversing an empty traversable never invokes the visitor and returns `true`.
    #[inline(always)]
    fn traverse<V>(&self, order: Order, visitor: V) -> bool
    where V: Visitor<Self::Value>,
    {
        self.traverse_from(self.cursor_to_root(), order, visitor)
    }
    /// Visits every node of the subtree rooted at the specified cursor in the specified order. `None` as the starting point is treated as an empty subtree.
    ///
    /// Returns `true` if the traversal ran to completion and `false` if the visitor stopped it early.
    fn traverse_from<V>(&self, start: Option<Self::Cursor>, order: Order, visitor: V) -> bool
    where V: Visitor<Self::Value>,
    {
        match order {
            Order::PreOrder => algorithms::pre_order(self, start, visitor),
            Order::InOrder => algorithms::in_order(self, start, visitor),
            Order::PostOrder => algorithms::post_order(self, start, visitor),
            Order::LevelOrder => algorithms::level_order(self, start, visitor),
        }
    }
    /// Returns an iterator over the cursors of all nodes in the specified order, starting from the root.
    #[inline(always)]
    fn cursors(&self, order: Order) -> Traverse<'_, Self> {
        Traverse::new(self, self.cursor_to_root(), order)
    }
}

/// An iterator over the cursors of a [`Traversable`] in one of the four [`Order`]s.
///
/// Created by [`Traversable::cursors`] or [`Traverse::new`].
///
/// [`Traversable`]: trait.Traversable.html " "
/// [`Order`]: enum.Order.html " "
/// [`Traversable::cursors`]: trait.Traversable.html#method.cursors " "
/// [`Traverse::new`]: #method.new " "
pub struct Traverse<'a, T: Traversable> {
    inner: TraverseInner<'a, T>,
}
enum TraverseInner<'a, T: Traversable> {
    PreOrder(PreOrder<'a, T>),
    InOrder(InOrder<'a, T>),
    PostOrder(PostOrder<'a, T>),
    LevelOrder(LevelOrder<'a, T>),
}
impl<'a, T: Traversable> Traverse<'a, T> {
    /// Creates an iterator over the subtree rooted at the specified cursor. `None` as the starting point produces an empty iterator.
    pub fn new(traversable: &'a T, start: Option<T::Cursor>, order: Order) -> Self {
        let inner = match order {
            Order::PreOrder => TraverseInner::PreOrder(PreOrder::new(traversable, start)),
            Order::InOrder => TraverseInner::InOrder(InOrder::new(traversable, start)),
            Order::PostOrder => TraverseInner::PostOrder(PostOrder::new(traversable, start)),
            Order::LevelOrder => TraverseInner::LevelOrder(LevelOrder::new(traversable, start)),
        };
        Self { inner }
    }
    /// Returns the order in which the iterator visits the nodes.
    pub fn order(&self) -> Order {
        match &self.inner {
            TraverseInner::PreOrder(..) => Order::PreOrder,
            TraverseInner::InOrder(..) => Order::InOrder,
            TraverseInner::PostOrder(..) => Order::PostOrder,
            TraverseInner::LevelOrder(..) => Order::LevelOrder,
        }
    }
}
impl<'a, T: Traversable> Iterator for Traverse<'a, T> {
    type Item = T::Cursor;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            TraverseInner::PreOrder(x) => x.next(),
            TraverseInner::InOrder(x) => x.next(),
            TraverseInner::PostOrder(x) => x.next(),
            TraverseInner::LevelOrder(x) => x.next(),
        }
    }
}
impl<T: Traversable> FusedIterator for Traverse<'_, T> {}
impl<T: Traversable> Debug for Traverse<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverse")
            .field("order", &self.order())
            .finish()
    }
}

//───────────────────────────┐
// Implementations for refs  │
//───────────────────────────┘
impl<T: Traversable> Traversable for &T {
    type Value = T::Value;
    type Cursor = T::Cursor;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        (**self).cursor_to_root()
    }
    #[inline(always)]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        (**self).value_of(cursor)
    }
    #[inline(always)]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).parent_of(cursor)
    }
    #[inline(always)]
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).left_child_of(cursor)
    }
    #[inline(always)]
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        (**self).right_child_of(cursor)
    }
}
