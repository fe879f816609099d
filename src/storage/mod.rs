//! The backing storage used by the trees.
//!
//! Trees do not allocate their nodes individually. Instead, every node lives in an arena which implements [`Storage`], and nodes refer to each other by the keys that storage hands out. The actual storage machinery is provided by the [`granite`] crate; this module re-exports the parts of it the trees are generic over and picks the default.
//!
//! The trees rely on keys of live nodes staying valid while other nodes are removed. [`SparseVec`], the default, satisfies this by leaving a hole behind every removed element and reusing holes on insertion; storages which do not shift elements at all (such as slot maps) satisfy it trivially. List storages which shift later elements down on removal, such as a plain `Vec`, do not: removing a node from one of those panics.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`SparseVec`]: type.SparseVec.html " "
//! [`granite`]: https://docs.rs/granite " "

#[doc(no_inline)]
pub use granite::{Storage, SparseVec};

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is always a [`SparseVec`], which keeps keys stable when nodes are removed.
///
/// [`SparseVec`]: type.SparseVec.html " "
pub type DefaultStorage<T> = SparseVec<T>;
