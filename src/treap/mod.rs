//! Probabilistic binary search tree where each node also maintains the heap invariant on a
//! randomly generated priority, and equal values are merged into a single node.

mod handle;
mod node;
mod set;
mod tree;

pub use self::handle::{NodeId, NodeRef};
pub use self::set::Treap;
