//! An ordered, mergeable treap.
//!
//! `Treap<T>` stores values ordered by `Ord` and merges equal values through `Mergeable`. Search
//! operations return `NodeRef` views that can walk to their in-order neighbors without searching
//! from the root again.
//!
//! # Examples
//!
//! ```
//! use merge_treap::{Mergeable, Treap};
//! # #[derive(Debug, Eq, Ord, PartialEq, PartialOrd)]
//! # struct Key(i32);
//! # impl Mergeable for Key { fn merge(&mut self, _: Key) {} }
//!
//! let mut treap = Treap::new();
//! for key in &[5, 2, 8, 1] {
//!     treap.insert(Key(*key));
//! }
//!
//! let mut keys = Vec::new();
//! let mut curr = treap.min();
//! while let Some(node) = curr {
//!     keys.push(node.value().0);
//!     curr = node.successor();
//! }
//! assert_eq!(keys, vec![1, 2, 5, 8]);
//! ```

mod arena;
mod mergeable;
pub mod treap;

pub use crate::mergeable::Mergeable;
pub use crate::treap::{NodeId, NodeRef, Treap};
