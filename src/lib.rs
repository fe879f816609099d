//! Arena-allocated binary trees and binary search trees.
//!
//! # Overview
//! Sapwood implements binary trees using a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The nodes live in some sort of backing storage, typically a vector which leaves holes behind removed nodes, and instead of using pointers to link to children, indices into the storage are used. Every node also links back to its parent, which is what makes it possible to walk the tree upwards, and caches its height.
//!
//! Two tree types are provided:
//! - [`BinaryTree`], a general binary tree which is built node by node and supports moving whole subtrees between trees
//! - [`SearchTree`], an unbalanced binary search tree built on top of it, holding every value at most once
//!
//! Both keep their size and the heights of all nodes up to date after every edit, which makes checking how balanced a subtree is an `O(1)` operation. Both can be walked in pre-order, in-order, post-order and level order, either with a visitor callback or with an iterator. None of the algorithms recurse, so even trees which degenerated into a long chain can be handled.
//!
//! # Example
//! ```rust
//! use sapwood::{SearchTree, traversal::Order};
//!
//! let mut tree = SearchTree::<_>::new();
//! tree.extend([8, 3, 10, 1, 6, 14].iter().copied());
//! assert!(tree.contains(&6));
//! assert_eq!(tree.min(), Some(&1));
//!
//! let mut levels = Vec::new();
//! tree.traverse_level_order(|x| levels.push(*x));
//! assert_eq!(levels, [8, 3, 10, 1, 6, 14]);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.height(), 2);
//! assert_eq!(root.balance_factor(), 0);
//! ```
//!
//! # Storage
//! The trait used for defining the "arena" type used is [`Storage`], which, along with the storage types implementing it, comes from the [`granite`] crate. The trees are generic over it and default to [`SparseVec`], which keeps the keys of nodes valid while other nodes are removed.
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types.
//! - `tracing` — emits `TRACE`-level [`tracing`] events for every structural edit of a tree: insertions, removals, and moves of subtrees. Compiles to nothing when disabled.
//! - `doc_cfg` — marks feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `granite` (**required**) — `^1.0`
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`granite`]: https://docs.rs/granite " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`SparseVec`]: storage/type.SparseVec.html " "
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html " "
//! [`SearchTree`]: search_tree/struct.SearchTree.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub(crate) mod util;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod queue;
pub use queue::Queue;

pub mod traversal;
pub use traversal::{Visitor, Traversable, Order};

pub mod binary_tree;
pub use binary_tree::BinaryTree;

pub mod search_tree;
pub use search_tree::SearchTree;

/// A prelude for using Sapwood, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
        NodeRefMut as BinaryTreeNodeRefMut,
        Side as BinaryTreeSide,
    };
    #[doc(no_inline)]
    pub use crate::search_tree::SearchTree;
    #[doc(no_inline)]
    pub use crate::traversal::{
        Traversable,
        Visitor as TreeVisitor,
        VisitorDirection as TreeVisitorDirection,
        Order as TraversalOrder,
    };
}
