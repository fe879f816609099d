//! Trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! Every node keeps a link to its parent and a cached *height* (the number of edges on the longest path from the node down to a leaf, with leaves having a height of zero and absent children counting as `-1`). The tree itself keeps track of how many nodes it holds. Both are maintained incrementally by every structural edit, so reading them is always `O(1)`.
//!
//! Nodes are addressed by the keys of the storage they live in. A key handed out by one tree is meaningless for another one, and keys of removed nodes must not be used again: trees will panic upon finding such a key instead of returning garbage.
//!
//! # Example
//! ```rust
//! use sapwood::binary_tree::{BinaryTree, NodeRef};
//!
//! // Create an empty tree and give it a root. The turbofish is needed to state that we are using
//! // the default key and storage types instead of asking the compiler to infer them.
//! let mut tree = BinaryTree::<_>::new();
//! let root = tree.insert_as_root("Hello");
//!
//! // Add children on both sides of the root:
//! let left = tree.insert_as_left_child(&root, "World");
//! tree.insert_as_right_child(&root, "Rust");
//! // And one more level on the left:
//! tree.insert_as_left_child(&left, "!");
//!
//! assert_eq!(tree.size(), 4);
//! let root: NodeRef<'_, _, _> = tree.root().unwrap();
//! assert_eq!(root.height(), 2);
//! assert_eq!(*root.left_child().unwrap().value(), "World");
//!
//! // The tree can be walked in any of the four classic orders:
//! let mut words = Vec::new();
//! tree.traverse_level_order(|x| words.push(*x));
//! assert_eq!(words, ["Hello", "World", "Rust", "!"]);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "

use core::fmt::{self, Formatter, Debug, Display};

mod base;
mod impl_traversable;
mod node;
mod node_ref;
mod node_ref_mut;

pub use node::Node;
pub use node_ref::{NodeRef, height_of};
pub use node_ref_mut::NodeRefMut;
pub use base::BinaryTree;

/// One of the two child slots of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}
impl Side {
    /// Returns the other side.
    #[inline(always)]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
impl Display for Side {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// The error type returned by the methods which insert a new node into a tree, such as [`BinaryTree::try_insert_as_root`] and [`BinaryTree::try_insert_as_child`].
///
/// [`BinaryTree::try_insert_as_root`]: struct.BinaryTree.html#method.try_insert_as_root " "
/// [`BinaryTree::try_insert_as_child`]: struct.BinaryTree.html#method.try_insert_as_child " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsertError<T> {
    /// A root node was to be inserted, but the tree already has one.
    TreeNotEmpty {
        /// The value to insert, which was deemed useless when the operation failed and is returned to the caller to avoid dropping it.
        value: T,
    },
    /// A child node was to be inserted, but the parent already has a child on that side.
    SlotOccupied {
        /// The side at which the insertion was attempted.
        side: Side,
        /// The value to insert, which was deemed useless when the operation failed and is returned to the caller to avoid dropping it.
        value: T,
    },
}
impl<T> InsertError<T> {
    /// Extracts the value which was to be inserted.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn value(self) -> T {
        match self {
            Self::TreeNotEmpty { value } | Self::SlotOccupied { value, .. } => value,
        }
    }
}
impl<T> Display for InsertError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::TreeNotEmpty { .. } => "the tree already has a root node",
            Self::SlotOccupied {
                side: Side::Left, ..
            } => "the node already has a left child",
            Self::SlotOccupied {
                side: Side::Right, ..
            } => "the node already has a right child",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for InsertError<T> {}

/// The error type returned by [`BinaryTree::try_attach`] when the node already has a child at the side where the subtree was to be attached.
///
/// [`BinaryTree::try_attach`]: struct.BinaryTree.html#method.try_attach " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotOccupiedError {
    /// The side at which the subtree was to be attached.
    pub side: Side,
}
impl Display for SlotOccupiedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self.side {
            Side::Left => "cannot attach a subtree, the node already has a left child",
            Side::Right => "cannot attach a subtree, the node already has a right child",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for SlotOccupiedError {}

/// A binary tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
#[allow(unused_qualifications)]
pub type SparseVecBinaryTree<T> = BinaryTree<T, usize, crate::storage::SparseVec<Node<T, usize>>>;

#[cfg(test)]
pub(crate) mod tests;
