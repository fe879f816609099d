//! The four traversal orders over binary traversables.
//!
//! Each order comes in two forms: a cursor iterator ([`PreOrder`], [`InOrder`], [`PostOrder`], [`LevelOrder`]) and a function which drives the iterator and feeds the values of the visited nodes to a [`Visitor`] ([`pre_order`], [`in_order`], [`post_order`], [`level_order`]). All of them take the cursor of the subtree root to start from, with `None` meaning an empty subtree.
//!
//! The depth-first orders keep an explicit stack instead of recursing, since nothing keeps the traversed trees balanced. Level order uses a [`Queue`].
//!
//! [`PreOrder`]: struct.PreOrder.html " "
//! [`InOrder`]: struct.InOrder.html " "
//! [`PostOrder`]: struct.PostOrder.html " "
//! [`LevelOrder`]: struct.LevelOrder.html " "
//! [`pre_order`]: fn.pre_order.html " "
//! [`in_order`]: fn.in_order.html " "
//! [`post_order`]: fn.post_order.html " "
//! [`level_order`]: fn.level_order.html " "
//! [`Visitor`]: ../trait.Visitor.html " "
//! [`Queue`]: ../../queue/struct.Queue.html " "

mod depth_first;
mod level_order;
pub use depth_first::*;
pub use level_order::*;

use super::{Traversable, Visitor, VisitorDirection};

/// Feeds the values at the cursors produced by `cursors` to the visitor until either runs out.
fn drive<T, I, V>(traversable: &T, cursors: I, mut visitor: V) -> bool
where
    T: Traversable,
    I: Iterator<Item = T::Cursor>,
    V: Visitor<T::Value>,
{
    for cursor in cursors {
        if let VisitorDirection::Stop = visitor.visit(traversable.value_of(&cursor)) {
            return false;
        }
    }
    true
}

/// Visits the subtree rooted at `start` in pre-order: node, left subtree, right subtree.
///
/// Returns `false` if the visitor stopped the traversal early, `true` otherwise.
#[inline]
pub fn pre_order<T, V>(traversable: &T, start: Option<T::Cursor>, visitor: V) -> bool
where
    T: Traversable,
    V: Visitor<T::Value>,
{
    drive(traversable, PreOrder::new(traversable, start), visitor)
}
/// Visits the subtree rooted at `start` in in-order: left subtree, node, right subtree.
///
/// Returns `false` if the visitor stopped the traversal early, `true` otherwise.
#[inline]
pub fn in_order<T, V>(traversable: &T, start: Option<T::Cursor>, visitor: V) -> bool
where
    T: Traversable,
    V: Visitor<T::Value>,
{
    drive(traversable, InOrder::new(traversable, start), visitor)
}
/// Visits the subtree rooted at `start` in post-order: left subtree, right subtree, node.
///
/// Returns `false` if the visitor stopped the traversal early, `true` otherwise.
#[inline]
pub fn post_order<T, V>(traversable: &T, start: Option<T::Cursor>, visitor: V) -> bool
where
    T: Traversable,
    V: Visitor<T::Value>,
{
    drive(traversable, PostOrder::new(traversable, start), visitor)
}
/// Visits the subtree rooted at `start` level by level, left to right within a level.
///
/// Returns `false` if the visitor stopped the traversal early, `true` otherwise.
#[inline]
pub fn level_order<T, V>(traversable: &T, start: Option<T::Cursor>, visitor: V) -> bool
where
    T: Traversable,
    V: Visitor<T::Value>,
{
    drive(traversable, LevelOrder::new(traversable, start), visitor)
}
